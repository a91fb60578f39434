use std::sync::Arc;

use jt_core::pages::PageGraph;
use jt_core::settings::settings;

use super::{JtCustomWords, JtDictionary, JtError, JtSession};

/// Shared resources for creating sessions: dictionary, page graph and the
/// optional custom-word store.
#[derive(uniffi::Object)]
pub struct JtEngine {
    dict: Arc<JtDictionary>,
    pages: Arc<PageGraph>,
    custom_words: Option<Arc<JtCustomWords>>,
}

#[uniffi::export]
impl JtEngine {
    /// `pages_toml` replaces the built-in page graph when given.
    #[uniffi::constructor]
    pub fn new(
        dict: Arc<JtDictionary>,
        custom_words: Option<Arc<JtCustomWords>>,
        pages_toml: Option<String>,
    ) -> Result<Arc<Self>, JtError> {
        let layout = settings().layout.mode;
        let pages = match pages_toml {
            Some(toml) => {
                PageGraph::from_toml(&toml, dict.inner.ambiguity_map(), layout)
                    .map_err(|e| JtError::InvalidData { msg: e.to_string() })?
            }
            None => PageGraph::standard(layout),
        };
        Ok(Arc::new(Self {
            dict,
            pages: Arc::new(pages),
            custom_words,
        }))
    }

    pub fn create_session(&self) -> Arc<JtSession> {
        JtSession::new(
            (*self.dict.inner).clone(),
            Arc::clone(&self.pages),
            self.custom_words.as_ref().map(Arc::clone),
        )
    }

    pub fn page_names(&self) -> Vec<String> {
        self.pages
            .page_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
