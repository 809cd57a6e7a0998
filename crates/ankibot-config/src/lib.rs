use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::bot::BotConfig;
use self::dictionary::DictionaryConfig;

pub mod bot;
pub mod dictionary;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub bot: BotConfig,
}

impl Config {
    /// Defaults overridden by process environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Config file overridden by process environment variables
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)?;
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (usually the process environment) and validate
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup("DICTIONARY_URL") {
            self.dictionary.url_prefix = url;
        }

        if let Some(agent) = lookup("DICTIONARY_USER_AGENT") {
            self.dictionary.user_agent = agent;
        }

        if let Some(timeout) = lookup("FETCH_TIMEOUT_SECONDS") {
            self.dictionary.timeout_seconds =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "FETCH_TIMEOUT_SECONDS",
                    reason: format!("'{timeout}' is not a number of seconds"),
                })?;
        }

        if let Some(per_page) = lookup("WORDS_PER_PAGE") {
            self.bot.words_per_page = per_page.parse().map_err(|_| ConfigError::InvalidValue {
                field: "WORDS_PER_PAGE",
                reason: format!("'{per_page}' is not a number"),
            })?;
        }

        if let Some(language) = lookup("LEMMA_LANGUAGE") {
            self.bot.language = language;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.page_size().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "words_per_page",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.dictionary.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bot.words_per_page, 5);
        assert_eq!(config.bot.language, "en");
        assert_eq!(config.dictionary.timeout_seconds, 10);
        assert!(config.dictionary.url_prefix.ends_with('/'));
        assert!(config.dictionary.user_agent.starts_with("ankibot/"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "bot": { "words_per_page": 3 } }"#).unwrap();
        assert_eq!(config.bot.words_per_page, 3);
        assert_eq!(config.bot.language, "en");
        assert_eq!(config.dictionary.timeout_seconds, 10);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env_of(&[
                ("DICTIONARY_URL", "http://localhost:9000/words/"),
                ("WORDS_PER_PAGE", "2"),
                ("FETCH_TIMEOUT_SECONDS", "3"),
            ]))
            .unwrap();

        assert_eq!(config.dictionary.url_prefix, "http://localhost:9000/words/");
        assert_eq!(config.bot.words_per_page, 2);
        assert_eq!(config.dictionary.timeout_seconds, 3);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env(env_of(&[("WORDS_PER_PAGE", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "words_per_page", .. })
        ));
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_env(env_of(&[("FETCH_TIMEOUT_SECONDS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "FETCH_TIMEOUT_SECONDS", .. })
        ));
    }
}
