use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_url_prefix() -> String {
    "https://dictionary.cambridge.org/dictionary/english/".to_string()
}

fn default_user_agent() -> String {
    format!(
        "ankibot/{} (vocabulary lookup assistant)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word pages live at `{url_prefix}{word}`
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Sent as the User-Agent header on every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Upper bound for a single page fetch
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DictionaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
