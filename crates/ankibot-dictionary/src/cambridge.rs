use std::collections::HashMap;
use std::sync::Arc;

use ankibot_config::dictionary::DictionaryConfig;
use ankibot_core::dictionary::{Dictionary, Entries};
use ankibot_core::{DictionaryError, FetchError, ParseError, WordEntry};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::fetch::{FetchedPage, HttpFetcher, PageFetcher};
use crate::parser;

/// Dictionary backed by word pages of a remote HTML source.
///
/// Entries of every word found so far are cached for the lifetime of the
/// dictionary. Words that were not found are not cached and are fetched again
/// on the next lookup.
pub struct RemoteHtmlDictionary<F = HttpFetcher> {
    name: String,
    fetcher: F,
    cache: RwLock<HashMap<String, Entries>>,
}

impl RemoteHtmlDictionary<HttpFetcher> {
    /// Cambridge English Dictionary over HTTP
    pub fn cambridge(config: &DictionaryConfig) -> Result<Self, FetchError> {
        Ok(Self::new("Cambridge", HttpFetcher::new(config)?))
    }
}

impl<F: PageFetcher> RemoteHtmlDictionary<F> {
    pub fn new(name: impl Into<String>, fetcher: F) -> Self {
        Self {
            name: name.into(),
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Parse a fetched word page into entries
    pub fn parse(&self, document: &str, word: &str) -> Result<Vec<WordEntry>, ParseError> {
        parser::parse_entries(document, word)
    }

    pub async fn cached(&self, word: &str) -> Option<Entries> {
        self.cache.read().await.get(word).cloned()
    }

    #[cfg(test)]
    pub(crate) async fn cached_words(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Fetch, parse and cache `word`; `None` when the source has no page for it.
    ///
    /// The cache lock is not held while fetching, so concurrent misses for the
    /// same word each fetch and the last one to finish wins.
    async fn load(&self, word: &str) -> Result<Option<Entries>, DictionaryError> {
        let page = self.fetcher.fetch(word).await.map_err(|source| {
            tracing::error!(word, "Failed to fetch word page: {}", source);
            DictionaryError::Fetch {
                word: word.to_string(),
                source,
            }
        })?;

        let body = match page {
            FetchedPage::NotFound => {
                tracing::info!(word, "Word not found in {}", self.name);
                return Ok(None);
            }
            FetchedPage::Found { url, body } => {
                tracing::debug!(word, %url, "Fetched word page");
                body
            }
        };

        let entries: Entries = self
            .parse(&body, word)
            .map_err(|source| {
                tracing::error!(word, "Failed to parse word page: {}", source);
                DictionaryError::Parse {
                    word: word.to_string(),
                    source,
                }
            })?
            .into();

        tracing::info!(word, count = entries.len(), "Cached dictionary entries");
        self.cache
            .write()
            .await
            .insert(word.to_string(), Arc::clone(&entries));

        Ok(Some(entries))
    }
}

#[async_trait]
impl<F: PageFetcher> Dictionary for RemoteHtmlDictionary<F> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn exists(&self, word: &str) -> Result<bool, DictionaryError> {
        if self.cache.read().await.contains_key(word) {
            tracing::debug!(word, "Cache hit");
            return Ok(true);
        }

        Ok(self.load(word).await?.is_some())
    }

    async fn get_entries(&self, word: &str) -> Result<Entries, DictionaryError> {
        if let Some(entries) = self.cached(word).await {
            tracing::debug!(word, "Cache hit");
            return Ok(entries);
        }

        Ok(self.load(word).await?.unwrap_or_else(|| Arc::from([])))
    }
}
