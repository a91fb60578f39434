use std::fs;
use std::process;

use jt_core::ambiguity::AmbiguityMap;
use jt_core::pages::{PageGraph, DEFAULT_PAGES_TOML};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", jt_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        jt_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: layout.mode={:?}, engine.max_completions={}, engine.undo_limit={}",
        s.layout.mode, s.engine.max_completions, s.engine.undo_limit
    );
}

pub fn pages_export() {
    print!("{DEFAULT_PAGES_TOML}");
}

pub fn pages_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let layout = jt_core::settings::settings().layout.mode;
    let graph = die!(
        PageGraph::from_toml(&content, AmbiguityMap::standard(), layout),
        "Error: {}"
    );
    println!(
        "OK: {} pages, start={} ({})",
        graph.len(),
        graph.start_page(),
        graph.page_names().join(", ")
    );
}
