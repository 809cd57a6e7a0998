use std::fmt;

/// One sense of a headword together with its usage examples
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: String,
    definition: String,
    examples: Vec<String>,
}

impl WordEntry {
    /// Returns `None` when the definition is blank
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        examples: Vec<String>,
    ) -> Option<Self> {
        let definition = definition.into();
        if definition.trim().is_empty() {
            return None;
        }

        Some(Self {
            word: word.into(),
            definition,
            examples,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.definition)?;
        for example in &self.examples {
            write!(f, "\n  - {example}")?;
        }
        Ok(())
    }
}

/// Character span of a match inside a sentence, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text, taken from the sentence the span was produced for
    pub fn extract(&self, sentence: &str) -> String {
        sentence.chars().skip(self.start).take(self.len()).collect()
    }
}

/// Which page of which word a user is currently looking at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub word: String,
    pub page: usize,
}

impl PaginationState {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            page: 0,
        }
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }
}
