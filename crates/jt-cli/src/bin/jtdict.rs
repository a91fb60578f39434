use std::path::Path;

use clap::{Parser, Subcommand};

use jt_cli::commands::{config_ops, custom_ops, dict_ops};

#[derive(Parser)]
#[command(name = "jtdict", about = "JustType dictionary and configuration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show node and entry counts (word list or compiled snapshot)
    Info {
        /// Word list or compiled dictionary file
        file: String,
    },
    /// Show ranked candidates for the buttons that type these letters
    Lookup {
        /// Word list or compiled dictionary file
        dict_file: String,
        /// Letters whose button sequence to look up
        letters: String,
        /// Maximum completions below the exact matches
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
    /// Compile a word list into a binary snapshot
    Compile {
        /// Word list (symbols;count[;pos[;output[;display]]] per line)
        word_list: String,
        /// Output file
        output_file: String,
        /// Words never offered, one per line
        #[arg(long)]
        reject: Option<String>,
    },
    /// Manage custom words
    Custom {
        /// Custom word file (default: ~/.justtype/custom_words.txt)
        #[arg(long)]
        file: Option<String>,
        #[command(subcommand)]
        action: CustomAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default page graph as TOML
    PagesExport,
    /// Validate a custom page graph TOML file
    PagesValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum CustomAction {
    /// Add a word
    Add { word: String },
    /// Remove a word
    Remove { word: String },
    /// List all saved words
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup {
            dict_file,
            letters,
            n,
        } => dict_ops::lookup(&dict_file, &letters, n),
        Command::Compile {
            word_list,
            output_file,
            reject,
        } => dict_ops::compile(&word_list, &output_file, reject.as_deref()),
        Command::Custom { file, action } => {
            let path_str = file.unwrap_or_else(custom_ops::default_custom_words_path);
            let path = Path::new(&path_str);
            match action {
                CustomAction::Add { word } => custom_ops::custom_add(path, &word),
                CustomAction::Remove { word } => custom_ops::custom_remove(path, &word),
                CustomAction::List => custom_ops::custom_list(path),
            }
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::PagesExport => config_ops::pages_export(),
        Command::PagesValidate { file } => config_ops::pages_validate(&file),
    }
}
