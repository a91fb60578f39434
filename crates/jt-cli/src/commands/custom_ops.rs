use std::path::Path;
use std::process;

use jt_core::user_dict::CustomWords;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn default_custom_words_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.justtype/custom_words.txt")
}

pub fn custom_add(path: &Path, word: &str) {
    let mut words = die!(CustomWords::open(path), "Error opening custom words: {}");
    if words.register(word) {
        die!(words.save(path), "Error saving custom words: {}");
        println!("Added: {word}");
    } else {
        println!("Already exists: {word}");
    }
}

pub fn custom_remove(path: &Path, word: &str) {
    let mut words = die!(CustomWords::open(path), "Error opening custom words: {}");
    if words.unregister(word) {
        die!(words.save(path), "Error saving custom words: {}");
        println!("Removed: {word}");
    } else {
        println!("Not found: {word}");
    }
}

pub fn custom_list(path: &Path) {
    let words = die!(CustomWords::open(path), "Error opening custom words: {}");
    if words.is_empty() {
        println!("(empty)");
    } else {
        for word in words.list() {
            println!("{word}");
        }
        println!("---");
        println!("{} words", words.len());
    }
}
