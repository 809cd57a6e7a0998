pub mod lemmatizer;
pub mod lexicon;
pub mod processor;
pub mod tagger;
pub mod tokenizer;

pub use lemmatizer::EnglishLemmatizer;
pub use processor::{EnglishProcessor, search_lemma};
pub use tagger::EnglishTagger;
