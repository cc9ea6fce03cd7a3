use std::sync::Arc;

use crate::config::Config;
use crate::words::Dictionary;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; each request rebuilds its
/// layout from the word list it carries.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Reference dictionary for the suggestion scorer. Built-in list unless
    /// DICTIONARY_PATH points at a word file.
    pub dictionary: Arc<Dictionary>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary: Arc::new(dictionary),
        }
    }
}
