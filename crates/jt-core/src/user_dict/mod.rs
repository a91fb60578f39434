//! User-saved words.
//!
//! Words are kept in save order without duplicates and persisted in the
//! dictionary word-list format, so the file can be fed straight back through
//! `DisambiguationTrie::bulk_load` at startup.

#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::Path;

use crate::dict::{CUSTOM_WORD_COUNT, CUSTOM_WORD_POS};

#[derive(Debug, Clone, Default)]
pub struct CustomWords {
    words: Vec<String>,
}

impl CustomWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse word-list lines, keeping only the first field of each.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Self::new();
        for line in lines {
            if let Some(word) = line.as_ref().trim().split(';').next() {
                words.register(word);
            }
        }
        words
    }

    /// Register a word. Returns `true` if newly added, `false` if it already
    /// exists or is blank.
    pub fn register(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.words.iter().any(|w| w == word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// Unregister a word. Returns `true` if removed, `false` if not found.
    pub fn unregister(&mut self, word: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != word.trim());
        self.words.len() < before
    }

    pub fn list(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word-list lines (`word;count;pos`) for every saved word.
    pub fn to_lines(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| format!("{w};{CUSTOM_WORD_COUNT};{CUSTOM_WORD_POS}"))
            .collect()
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        let mut body = self.to_lines().join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, body)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::from_lines(text.lines())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }
}
