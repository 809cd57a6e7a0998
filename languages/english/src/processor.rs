use ankibot_core::{LanguageError, LanguageProcessor, LemmaKind, LemmaMatcher, MatchSpan, PosTag, Token};
use once_cell::sync::Lazy;

use crate::lemmatizer::EnglishLemmatizer;
use crate::tagger::EnglishTagger;
use crate::tokenizer;

static MATCHER: Lazy<LemmaMatcher> = Lazy::new(matcher);

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor {
    tagger: EnglishTagger,
    lemmatizer: EnglishLemmatizer,
}

impl EnglishProcessor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }

    fn tag(&self, tokens: &[Token]) -> Vec<PosTag> {
        self.tagger.tag(tokens)
    }

    fn lemmatize(&self, word: &str, kind: LemmaKind) -> String {
        self.lemmatizer.lemmatize(word, kind)
    }
}

/// Matcher with every bundled language registered
pub fn matcher() -> LemmaMatcher {
    LemmaMatcher::new().with_processor(EnglishProcessor::new())
}

/// Span of the first word in `sentence` that is a form of `word`
pub fn search_lemma(
    word: &str,
    sentence: &str,
    language: &str,
) -> Result<Option<MatchSpan>, LanguageError> {
    MATCHER.find_lemma(word, sentence, language)
}
