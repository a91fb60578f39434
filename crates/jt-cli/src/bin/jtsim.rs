use clap::Parser;

use jt_cli::commands::sim::{self, SimOptions};

#[derive(Parser)]
#[command(
    name = "jtsim",
    about = "Drive a JustType session from button indices",
    long_about = "Drive a JustType session from button indices.\n\n\
        Steps are whitespace-separated button indices (0-7) or offer:<word>. \
        Without --keys, one line of steps is read per stdin line."
)]
struct Cli {
    /// Word list (symbols;count[;pos[;output[;display]]] per line)
    dict_file: String,
    /// Steps to run, e.g. "3 4 1 6 0"
    #[arg(long)]
    keys: Option<String>,
    /// Words never offered, one per line
    #[arg(long)]
    reject: Option<String>,
    /// Custom word file, loaded at startup and updated when words are saved
    #[arg(long)]
    custom: Option<String>,
    /// Page graph TOML replacing the built-in pages
    #[arg(long)]
    pages: Option<String>,
    /// Settings TOML replacing the built-in settings
    #[arg(long)]
    settings: Option<String>,
    /// Print one JSON response per step instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        let content = std::fs::read_to_string(file).unwrap_or_else(|e| {
            eprintln!("Error reading {file}: {e}");
            std::process::exit(1);
        });
        if let Err(e) = jt_core::settings::init_custom(content) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let opts = SimOptions {
        dict_file: cli.dict_file,
        reject: cli.reject,
        custom: cli.custom,
        pages: cli.pages,
        json: cli.json,
    };
    sim::run(&opts, cli.keys.as_deref());
}
