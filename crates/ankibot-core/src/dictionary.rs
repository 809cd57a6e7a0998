use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DictionaryError;
use crate::types::WordEntry;

/// Entries of one word in source order; index 0 is the most common sense
pub type Entries = Arc<[WordEntry]>;

/// Dictionary lookup operations
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Human readable name of the source
    fn name(&self) -> &str;

    /// Whether the source has a page for `word`.
    ///
    /// A positive answer also caches the word's entries. A negative answer is
    /// not an error and is not cached.
    async fn exists(&self, word: &str) -> Result<bool, DictionaryError>;

    /// All entries for `word`, empty when the word is not found
    async fn get_entries(&self, word: &str) -> Result<Entries, DictionaryError>;
}
