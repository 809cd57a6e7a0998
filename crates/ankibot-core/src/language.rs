use crate::error::LanguageError;
use crate::types::MatchSpan;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Break text into word and punctuation tokens, in order
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Coarse part-of-speech tag for every token, same length and order as `tokens`
    fn tag(&self, tokens: &[Token]) -> Vec<PosTag>;

    /// Dictionary form of `word` under the given rule
    fn lemmatize(&self, word: &str, kind: LemmaKind) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    /// Byte offset of `surface` in the tokenized text
    pub position: usize,
}

impl Token {
    pub fn new(surface: impl Into<String>, position: usize) -> Self {
        let surface = surface.into();
        Self {
            normalized: surface.to_lowercase(),
            surface,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Modal,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    /// Infinitive marker ("to")
    Particle,
    Numeral,
    Interjection,
    Punctuation,
    Other,
}

impl PosTag {
    pub fn is_verb(&self) -> bool {
        matches!(self, PosTag::Verb)
    }
}

/// Which lemmatization rule applies to a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaKind {
    Verb,
    /// Everything that is not a verb is lemmatized as a noun
    Nominal,
}

impl From<PosTag> for LemmaKind {
    fn from(tag: PosTag) -> Self {
        if tag.is_verb() {
            LemmaKind::Verb
        } else {
            LemmaKind::Nominal
        }
    }
}

/// Locates inflected forms of a word inside sentences
#[derive(Default)]
pub struct LemmaMatcher {
    processors: Vec<Box<dyn LanguageProcessor>>,
}

impl LemmaMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processor(mut self, processor: impl LanguageProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn supports(&self, language: &str) -> bool {
        self.processor(language).is_ok()
    }

    fn processor(&self, language: &str) -> Result<&dyn LanguageProcessor, LanguageError> {
        self.processors
            .iter()
            .find(|p| p.language_code().eq_ignore_ascii_case(language))
            .map(|p| &**p)
            .ok_or_else(|| LanguageError::Unsupported(language.to_string()))
    }

    /// Span of the first token of `sentence` sharing a lemma with `word`.
    ///
    /// Each token is lemmatized according to its own tag in the sentence, the
    /// query according to the tag it gets on its own.
    pub fn find_lemma(
        &self,
        word: &str,
        sentence: &str,
        language: &str,
    ) -> Result<Option<MatchSpan>, LanguageError> {
        let processor = self.processor(language)?;

        let tokens = processor.tokenize(sentence);
        let tags = processor.tag(&tokens);

        let query = [Token::new(word, 0)];
        let query_tag = processor
            .tag(&query)
            .first()
            .copied()
            .unwrap_or(PosTag::Other);
        let target = lemma_of(processor, word, query_tag);
        tracing::debug!(word, ?query_tag, lemma = %target, "Target lemma");

        let found = tokens
            .iter()
            .zip(tags)
            .find(|(token, tag)| lemma_of(processor, &token.surface, *tag) == target)
            .and_then(|(token, _)| span_of(sentence, &token.surface));

        if found.is_none() {
            tracing::info!("Could not find word '{}' in sentence '{}'", word, sentence);
        }

        Ok(found)
    }
}

fn lemma_of(processor: &dyn LanguageProcessor, word: &str, tag: PosTag) -> String {
    processor.lemmatize(word, tag.into()).to_lowercase()
}

/// First occurrence of `surface` in `sentence`, in characters
fn span_of(sentence: &str, surface: &str) -> Option<MatchSpan> {
    let byte_start = sentence.find(surface)?;
    let start = sentence[..byte_start].chars().count();

    Some(MatchSpan {
        start,
        end: start + surface.chars().count(),
    })
}
