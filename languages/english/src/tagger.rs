use ankibot_core::{PosTag, Token};

use crate::lemmatizer::{VerbForm, analyze_verb};
use crate::lexicon;
use crate::tokenizer::{is_punctuation, normalize};

/// Punctuation after which a new clause starts
const CLAUSE_BOUNDARIES: &[&str] = &[".", "!", "?", ";", ":", "\"", "“", "(", "[", "—", "--"];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

/// What a token can be before looking at its neighbours
enum Reading {
    Fixed(PosTag),
    /// A form that is a verb or a noun depending on context
    Verb(VerbForm),
    /// "'s": either "is"/"has" or the possessive marker
    Clitic,
}

/// Lexicon and suffix driven part-of-speech tagger with left-context rules
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTagger;

impl EnglishTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag(&self, tokens: &[Token]) -> Vec<PosTag> {
        let words: Vec<String> = tokens.iter().map(|t| normalize(&t.surface)).collect();
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let clause_start = i == 0 || is_clause_boundary(&words[i - 1]);

            let tag = match read(&token.surface, &words[i], clause_start) {
                Reading::Fixed(tag) => tag,
                Reading::Verb(form) => resolve(form, &words[..i], &tags),
                Reading::Clitic => match tags.last() {
                    Some(PosTag::Pronoun) => PosTag::Verb,
                    _ => PosTag::Other,
                },
            };
            tags.push(tag);
        }

        tags
    }
}

fn is_clause_boundary(word: &str) -> bool {
    CLAUSE_BOUNDARIES.contains(&word)
}

fn read(surface: &str, word: &str, clause_start: bool) -> Reading {
    if word.chars().all(is_punctuation) {
        return Reading::Fixed(PosTag::Punctuation);
    }

    if word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '%'))
    {
        return Reading::Fixed(PosTag::Numeral);
    }

    if NUMBER_WORDS.contains(&word) {
        return Reading::Fixed(PosTag::Numeral);
    }

    if word == "'s" {
        return Reading::Clitic;
    }

    let closed = if word == "to" {
        Some(PosTag::Particle)
    } else if lexicon::is_auxiliary(word) {
        Some(PosTag::Verb)
    } else if lexicon::is_modal(word) {
        Some(PosTag::Modal)
    } else if lexicon::is_determiner(word) {
        Some(PosTag::Determiner)
    } else if lexicon::is_pronoun(word) {
        Some(PosTag::Pronoun)
    } else if lexicon::is_preposition(word) {
        Some(PosTag::Preposition)
    } else if lexicon::is_conjunction(word) {
        Some(PosTag::Conjunction)
    } else if lexicon::is_adverb(word) {
        Some(PosTag::Adverb)
    } else if lexicon::is_interjection(word) {
        Some(PosTag::Interjection)
    } else {
        None
    };

    if let Some(tag) = closed {
        return Reading::Fixed(tag);
    }

    if let Some((_, form)) = analyze_verb(word) {
        return Reading::Verb(form);
    }

    Reading::Fixed(guess(surface, word, clause_start))
}

/// Tag for a word missing from every lexicon
fn guess(surface: &str, word: &str, clause_start: bool) -> PosTag {
    let capitalized = surface.chars().next().is_some_and(char::is_uppercase);
    let long = word.chars().count() > 4;

    if capitalized && !clause_start {
        PosTag::ProperNoun
    } else if long && word.ends_with("ly") {
        PosTag::Adverb
    } else if long && (word.ends_with("ing") || word.ends_with("ed")) {
        PosTag::Verb
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        PosTag::Adjective
    } else {
        PosTag::Noun
    }
}

/// Decide between verb and noun readings from the words to the left
fn resolve(form: VerbForm, prev_words: &[String], prev_tags: &[PosTag]) -> PosTag {
    let prev = prev_tags.last().copied();
    let prev_word = prev_words.last().map(String::as_str).unwrap_or_default();

    match form {
        VerbForm::Base => match prev {
            None => PosTag::Verb,
            Some(PosTag::Punctuation) if is_clause_boundary(prev_word) => PosTag::Verb,
            Some(PosTag::Modal | PosTag::Particle | PosTag::Pronoun | PosTag::Adverb) => {
                PosTag::Verb
            }
            Some(PosTag::ProperNoun) => PosTag::Verb,
            // Plural subject: "dogs run"
            Some(PosTag::Noun) if prev_word.ends_with('s') => PosTag::Verb,
            Some(PosTag::Verb) if matches!(prev_word, "do" | "does" | "did") => PosTag::Verb,
            Some(PosTag::Conjunction) => coordinated(prev_tags),
            _ => PosTag::Noun,
        },
        VerbForm::ThirdPerson => match prev {
            Some(PosTag::Pronoun) if lexicon::is_subject_pronoun(prev_word) => PosTag::Verb,
            Some(PosTag::Noun | PosTag::ProperNoun | PosTag::Adverb) => PosTag::Verb,
            Some(PosTag::Conjunction) => coordinated(prev_tags),
            _ => PosTag::Noun,
        },
        VerbForm::Past => match prev {
            Some(PosTag::Determiner | PosTag::Adjective) => PosTag::Adjective,
            _ => PosTag::Verb,
        },
        VerbForm::Gerund => match prev {
            Some(PosTag::Determiner | PosTag::Adjective) => PosTag::Noun,
            _ => PosTag::Verb,
        },
    }
}

/// Reading of a word right after a conjunction: verbs coordinate with verbs
fn coordinated(prev_tags: &[PosTag]) -> PosTag {
    let anchor = prev_tags.iter().rev().find(|tag| {
        !matches!(
            tag,
            PosTag::Conjunction | PosTag::Punctuation | PosTag::Adverb
        )
    });

    match anchor {
        Some(PosTag::Verb | PosTag::Modal | PosTag::Pronoun) => PosTag::Verb,
        _ => PosTag::Noun,
    }
}
