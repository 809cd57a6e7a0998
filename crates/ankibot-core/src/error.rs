use std::error::Error as StdError;

/// Transport-level failure while fetching a word page. Callers may retry.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

/// The fetched markup no longer matches what the parser expects.
/// Not worth retrying until the parser is updated.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no definition blocks")]
    NoDefinitionBlocks,

    #[error("definition block {index} has no definition text")]
    MissingDefinition { index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to fetch '{word}': {source}")]
    Fetch {
        word: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to parse page for '{word}': {source}")]
    Parse {
        word: String,
        #[source]
        source: ParseError,
    },
}

impl DictionaryError {
    /// Whether retrying the same call later can succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, DictionaryError::Fetch { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("Unsupported language: {0}")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fetch_errors_are_transient() {
        let fetch = DictionaryError::Fetch {
            word: "run".into(),
            source: FetchError::Timeout,
        };
        let parse = DictionaryError::Parse {
            word: "run".into(),
            source: ParseError::NoDefinitionBlocks,
        };

        assert!(fetch.is_transient());
        assert!(!parse.is_transient());
        assert_eq!(
            parse.to_string(),
            "Failed to parse page for 'run': no definition blocks"
        );
    }
}
