use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use jt_core::dict::DisambiguationTrie;
use jt_core::pages::PageGraph;
use jt_core::settings::settings;
use jt_session::{HostRequest, InputSession, PressResponse, SessionConfig};

use super::{JtCustomWords, JtPressResponse, JtSnapshot};

#[derive(uniffi::Object)]
pub struct JtSession {
    custom_words: Option<Arc<JtCustomWords>>,
    session: Mutex<InputSession>,
}

impl JtSession {
    pub(super) fn new(
        trie: DisambiguationTrie,
        pages: Arc<PageGraph>,
        custom_words: Option<Arc<JtCustomWords>>,
    ) -> Arc<Self> {
        let config = SessionConfig::from_settings(settings());
        Arc::new(Self {
            custom_words,
            session: Mutex::new(InputSession::new(trie, pages, config)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, InputSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Save words the session asked to persist. A failed write is logged and
    /// the request still reaches the host.
    fn persist(&self, resp: &PressResponse) {
        let Some(store) = &self.custom_words else {
            return;
        };
        for request in &resp.requests {
            if let HostRequest::PersistCustomWord(word) = request {
                if let Err(e) = store.register(word.clone()) {
                    warn!(word = %word, error = %e, "custom word not saved");
                }
            }
        }
    }
}

#[uniffi::export]
impl JtSession {
    /// Press button `index` (0-7) on the current page. Out-of-range indices
    /// change nothing.
    pub fn handle_press(&self, index: u32) -> JtPressResponse {
        let resp = self.lock().handle_press(index as usize);
        self.persist(&resp);
        resp.into()
    }

    /// Offer a word (e.g. one spelled out letter by letter) at the head of
    /// the candidate list.
    pub fn offer_custom_word(&self, word: String) -> JtPressResponse {
        let resp = self.lock().offer_custom_word(&word);
        self.persist(&resp);
        resp.into()
    }

    pub fn snapshot(&self) -> JtSnapshot {
        self.lock().snapshot().into()
    }

    /// Start over with the current settings. Clears undo history.
    pub fn reset(&self) {
        self.lock().reset(SessionConfig::from_settings(settings()));
    }
}
