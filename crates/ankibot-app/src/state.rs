use std::sync::Arc;

use ankibot_config::Config;
use ankibot_core::preprocess::DefaultPreprocessor;
use ankibot_core::{Dictionary, LemmaMatcher, PaginationCursor};
use ankibot_dictionary::RemoteHtmlDictionary;
use tokio::sync::RwLock;

use crate::session::SessionStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub dictionary: Arc<dyn Dictionary>,
    pub matcher: LemmaMatcher,
    pub cursor: PaginationCursor,
    pub preprocessor: DefaultPreprocessor,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let dictionary = RemoteHtmlDictionary::cambridge(&config.dictionary)?;
        tracing::info!(
            "Using {} dictionary at {}",
            dictionary.name(),
            config.dictionary.url_prefix
        );
        Self::with_dictionary(config, Arc::new(dictionary))
    }

    pub fn with_dictionary(
        config: Config,
        dictionary: Arc<dyn Dictionary>,
    ) -> anyhow::Result<Self> {
        let page_size = config
            .bot
            .page_size()
            .ok_or_else(|| anyhow::anyhow!("words_per_page must be greater than zero"))?;

        let matcher = ankibot_lang_english::processor::matcher();
        if !matcher.supports(&config.bot.language) {
            tracing::warn!(
                "Lemma matching is not available for language '{}'",
                config.bot.language
            );
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            dictionary,
            matcher,
            cursor: PaginationCursor::new(page_size),
            preprocessor: DefaultPreprocessor,
            sessions: SessionStore::new(),
        })
    }
}
