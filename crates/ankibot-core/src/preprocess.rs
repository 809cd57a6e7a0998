use unicode_normalization::UnicodeNormalization;

const MAX_QUERY_CHARS: usize = 64;

pub trait Preprocessor {
    /// Trim, NFKC-normalize and collapse whitespace runs into single spaces
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfkc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Whether processed text looks like a word or short phrase worth looking up
    fn is_valid_query(&self, text: &str) -> bool {
        !text.is_empty()
            && text.chars().count() <= MAX_QUERY_CHARS
            && text
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'))
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
