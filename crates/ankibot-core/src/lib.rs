pub mod dictionary;
pub mod error;
pub mod language;
pub mod pagination;
pub mod preprocess;
pub mod types;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, FetchError, LanguageError, ParseError};
pub use language::{LanguageProcessor, LemmaKind, LemmaMatcher, PosTag, Token};
pub use pagination::{Page, PaginationCursor};
pub use types::{MatchSpan, PaginationState, WordEntry};
