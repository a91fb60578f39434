use std::fs;
use std::path::Path;
use std::process;

use jt_core::dict::{load_dictionary, DictError, DictionarySources, DisambiguationTrie};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Open a compiled snapshot (`JTDX` magic) or, failing that, load the file
/// as a plain word list.
pub fn open_trie(file: &str) -> Result<DisambiguationTrie, DictError> {
    let path = Path::new(file);
    let magic = fs::read(path)
        .ok()
        .and_then(|b| b.get(..4).map(|s| s.to_vec()));
    match magic.as_deref() {
        Some(b"JTDX") => DisambiguationTrie::open(path),
        _ => load_dictionary(&DictionarySources::new(path)),
    }
}

pub fn info(file: &str) {
    let trie = die!(open_trie(file), "Error opening dictionary: {}");
    let (nodes, entries) = trie.stats();
    println!("Nodes:   {nodes}");
    println!("Entries: {entries}");
    println!("Groups:  {}", trie.ambiguity_map().groups().join(" "));
}

pub fn lookup(dict_file: &str, letters: &str, max_completions: usize) {
    let trie = die!(open_trie(dict_file), "Error opening dictionary: {}");
    let Some(keys) = trie.ambiguity_map().translate(letters) else {
        eprintln!("Error: '{letters}' contains a character with no button");
        process::exit(1);
    };
    let items = trie.ranked_lookup(&keys, max_completions);
    if items.is_empty() {
        println!("(no candidates)");
        return;
    }
    for item in &items {
        println!(
            "{}\t{}\t{}\t{}",
            item.kind.tag(),
            item.output,
            item.count,
            item.pos
        );
    }
}

pub fn compile(word_list: &str, output_file: &str, reject: Option<&str>) {
    let mut sources = DictionarySources::new(word_list);
    if let Some(reject) = reject {
        sources = sources.with_reject(reject);
    }

    eprintln!("Loading {word_list}...");
    let trie = die!(load_dictionary(&sources), "Error loading word list: {}");
    let (nodes, entries) = trie.stats();
    eprintln!("Built trie: {nodes} nodes, {entries} entries");

    die!(
        trie.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} KB)",
        file_size as f64 / 1024.0
    );
}
