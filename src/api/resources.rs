use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jt_core::dict::{load_dictionary, DictionarySources, DisambiguationTrie};
use jt_core::user_dict::CustomWords;

use super::{JtCandidate, JtDictStats, JtError};

/// A loaded dictionary. Each session works on its own copy, so custom words
/// saved in one session do not leak into sessions already running.
#[derive(uniffi::Object)]
pub struct JtDictionary {
    pub(crate) inner: Arc<DisambiguationTrie>,
}

#[uniffi::export]
impl JtDictionary {
    /// Build from word-list files. Only the primary list is required.
    #[uniffi::constructor]
    pub fn load(
        primary: String,
        reject: Option<String>,
        custom: Option<String>,
    ) -> Result<Arc<Self>, JtError> {
        let mut sources = DictionarySources::new(primary);
        if let Some(path) = reject {
            sources = sources.with_reject(path);
        }
        if let Some(path) = custom {
            sources = sources.with_custom(path);
        }
        let trie = load_dictionary(&sources)?;
        Ok(Arc::new(Self {
            inner: Arc::new(trie),
        }))
    }

    /// Open a compiled snapshot.
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, JtError> {
        let trie = DisambiguationTrie::open(Path::new(&path))?;
        Ok(Arc::new(Self {
            inner: Arc::new(trie),
        }))
    }

    pub fn save(&self, path: String) -> Result<(), JtError> {
        Ok(self.inner.save(Path::new(&path))?)
    }

    pub fn stats(&self) -> JtDictStats {
        let (nodes, entries) = self.inner.stats();
        JtDictStats {
            nodes: nodes as u64,
            entries: entries as u64,
        }
    }

    /// Ranked candidates for the buttons that type `letters`. Empty if a
    /// letter is on no button.
    pub fn lookup(&self, letters: String, max_completions: u32) -> Vec<JtCandidate> {
        let Some(keys) = self.inner.ambiguity_map().translate(&letters) else {
            return Vec::new();
        };
        self.inner
            .ranked_lookup(&keys, max_completions as usize)
            .into_iter()
            .map(JtCandidate::from)
            .collect()
    }
}

/// The custom-word file, kept in memory and written back on every change.
#[derive(uniffi::Object)]
pub struct JtCustomWords {
    path: PathBuf,
    inner: Mutex<CustomWords>,
}

#[uniffi::export]
impl JtCustomWords {
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, JtError> {
        let path = PathBuf::from(path);
        let words = CustomWords::open(&path).map_err(|e| JtError::Io { msg: e.to_string() })?;
        Ok(Arc::new(Self {
            path,
            inner: Mutex::new(words),
        }))
    }

    pub fn register(&self, word: String) -> Result<bool, JtError> {
        let mut words = self.lock();
        if !words.register(&word) {
            return Ok(false);
        }
        Self::write(&words, &self.path)?;
        Ok(true)
    }

    pub fn unregister(&self, word: String) -> Result<bool, JtError> {
        let mut words = self.lock();
        if !words.unregister(&word) {
            return Ok(false);
        }
        Self::write(&words, &self.path)?;
        Ok(true)
    }

    pub fn list(&self) -> Vec<String> {
        self.lock().list().to_vec()
    }
}

impl JtCustomWords {
    fn lock(&self) -> MutexGuard<'_, CustomWords> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(words: &CustomWords, path: &Path) -> Result<(), JtError> {
        words.save(path).map_err(|e| JtError::Io {
            msg: format!("{}: {e}", path.display()),
        })
    }
}
