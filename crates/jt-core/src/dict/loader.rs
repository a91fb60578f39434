use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DictError, DisambiguationTrie};

/// Files a dictionary is assembled from at startup.
#[derive(Debug, Clone)]
pub struct DictionarySources {
    /// Main word list. Required.
    pub primary: PathBuf,
    /// Words never offered, one per line. Missing file means no rejects.
    pub reject: Option<PathBuf>,
    /// User-saved words in word-list format. Missing file is ignored.
    pub custom: Option<PathBuf>,
}

impl DictionarySources {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            reject: None,
            custom: None,
        }
    }

    pub fn with_reject(mut self, path: impl Into<PathBuf>) -> Self {
        self.reject = Some(path.into());
        self
    }

    pub fn with_custom(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom = Some(path.into());
        self
    }
}

pub fn read_word_list(path: &Path) -> Result<Vec<String>, DictError> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Trimmed, lower-cased reject words. A missing file yields an empty set.
pub fn read_reject_set(path: &Path) -> Result<HashSet<String>, DictError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashSet::new()),
        Err(e) => Err(e.into()),
    }
}

/// Build the trie from `sources`. Only a failure to read the primary list is
/// fatal.
pub fn load_dictionary(sources: &DictionarySources) -> Result<DisambiguationTrie, DictError> {
    let reject = match &sources.reject {
        Some(path) => read_reject_set(path)?,
        None => HashSet::new(),
    };

    let mut trie = DisambiguationTrie::new();
    let lines = read_word_list(&sources.primary)?;
    let stats = trie.bulk_load(&lines, &reject);
    debug!(path = %sources.primary.display(), ?stats, rejects = reject.len(), "primary word list");

    if let Some(path) = &sources.custom {
        match read_word_list(path) {
            Ok(lines) => {
                let stats = trie.bulk_load(&lines, &HashSet::new());
                debug!(path = %path.display(), ?stats, "custom word list");
            }
            Err(DictError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no custom word list");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(trie)
}
