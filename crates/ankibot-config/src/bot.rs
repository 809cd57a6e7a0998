use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

fn default_words_per_page() -> usize {
    5
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BotConfig {
    /// Definitions shown per page
    #[serde(default = "default_words_per_page")]
    pub words_per_page: usize,
    /// Language tag handed to the lemma matcher
    #[serde(default = "default_language")]
    pub language: String,
}

impl BotConfig {
    pub fn page_size(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.words_per_page)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            words_per_page: default_words_per_page(),
            language: default_language(),
        }
    }
}
