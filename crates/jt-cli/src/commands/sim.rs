//! Headless press simulator.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use jt_core::ambiguity::AmbiguityMap;
use jt_core::dict::{load_dictionary, DictionarySources};
use jt_core::pages::PageGraph;
use jt_core::settings::settings;
use jt_core::user_dict::CustomWords;
use jt_session::{HostRequest, InputSession, PressResponse, SessionConfig};

use crate::render;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid step '{0}' (expected a button index or offer:<word>)")]
    InvalidStep(String),
}

/// One simulator input: a button press or a word offered by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Press(usize),
    Offer(String),
}

impl FromStr for Step {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(word) = s.strip_prefix("offer:") {
            return Ok(Step::Offer(word.to_string()));
        }
        s.parse()
            .map(Step::Press)
            .map_err(|_| SimError::InvalidStep(s.to_string()))
    }
}

/// Split a line of whitespace-separated steps.
pub fn parse_steps(line: &str) -> Result<Vec<Step>, SimError> {
    line.split_whitespace().map(str::parse).collect()
}

pub struct SimOptions {
    pub dict_file: String,
    pub reject: Option<String>,
    /// Custom-word file loaded at startup and updated on persist requests.
    pub custom: Option<String>,
    /// Page graph TOML replacing the built-in one.
    pub pages: Option<String>,
    pub json: bool,
}

pub fn run(opts: &SimOptions, keys: Option<&str>) {
    let mut sources = DictionarySources::new(&opts.dict_file);
    if let Some(reject) = &opts.reject {
        sources = sources.with_reject(reject);
    }
    if let Some(custom) = &opts.custom {
        sources = sources.with_custom(custom);
    }
    let trie = die!(load_dictionary(&sources), "Error loading dictionary: {}");

    let layout = settings().layout.mode;
    let pages = match &opts.pages {
        Some(file) => {
            let toml = die!(std::fs::read_to_string(file), "Error reading {file}: {}");
            die!(
                PageGraph::from_toml(&toml, AmbiguityMap::standard(), layout),
                "Error in page graph: {}"
            )
        }
        None => PageGraph::standard(layout),
    };

    let mut session = InputSession::new(trie, Arc::new(pages), SessionConfig::default());
    let custom_path = opts.custom.as_ref().map(PathBuf::from);

    if !opts.json {
        print!("{}", render::render_snapshot(&session.snapshot()));
    }

    match keys {
        Some(line) => run_line(&mut session, line, opts.json, custom_path.as_deref()),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                run_line(&mut session, &line, opts.json, custom_path.as_deref());
            }
        }
    }
}

fn run_line(session: &mut InputSession, line: &str, json: bool, custom: Option<&Path>) {
    let steps = die!(parse_steps(line), "Error: {}");
    for step in steps {
        let resp = match &step {
            Step::Press(index) => session.handle_press(*index),
            Step::Offer(word) => session.offer_custom_word(word),
        };
        persist_requests(&resp, custom);
        print_response(&step, &resp, json);
    }
}

fn persist_requests(resp: &PressResponse, custom: Option<&Path>) {
    let Some(path) = custom else {
        return;
    };
    for request in &resp.requests {
        if let HostRequest::PersistCustomWord(word) = request {
            let mut words = die!(CustomWords::open(path), "Error opening custom words: {}");
            if words.register(word) {
                die!(words.save(path), "Error saving custom words: {}");
            }
        }
    }
}

fn print_response(step: &Step, resp: &PressResponse, json: bool) {
    if json {
        let line = serde_json::to_string(resp).expect("JSON serialization failed");
        println!("{line}");
    } else {
        match step {
            Step::Press(index) => println!("--- press {index}"),
            Step::Offer(word) => println!("--- offer {word}"),
        }
        print!("{}", render::render_response(resp));
    }
}
