use ankibot_core::LemmaKind;

use crate::lexicon;
use crate::tokenizer::normalize;

/// Inflection a verb form carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbForm {
    Base,
    ThirdPerson,
    Past,
    Gerund,
}

/// Detachment rules tried in order: (suffix, replacement, form)
const VERB_RULES: &[(&str, &str, VerbForm)] = &[
    ("ies", "y", VerbForm::ThirdPerson),
    ("es", "e", VerbForm::ThirdPerson),
    ("es", "", VerbForm::ThirdPerson),
    ("s", "", VerbForm::ThirdPerson),
    ("ied", "y", VerbForm::Past),
    ("ed", "e", VerbForm::Past),
    ("ed", "", VerbForm::Past),
    ("ing", "e", VerbForm::Gerund),
    ("ing", "", VerbForm::Gerund),
];

/// Plural endings that take "es": (suffix, how much to strip)
const NOUN_ES_ENDINGS: &[&str] = &["sses", "ches", "shes", "xes", "zzes"];

/// Base form and inflection of a lower-cased word, if it is a known verb form.
///
/// Regular forms are only accepted when stripping them yields a known base
/// verb, so "bed" or "sing" never turn into "b" or "s".
pub fn analyze_verb(word: &str) -> Option<(String, VerbForm)> {
    if let Some(base) = lexicon::irregular_verb(word) {
        return Some((base.to_string(), irregular_form(word)));
    }

    if lexicon::is_base_verb(word) {
        return Some((word.to_string(), VerbForm::Base));
    }

    for &(suffix, replacement, form) in VERB_RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.chars().count() < 2 {
            continue;
        }

        let candidate = format!("{stem}{replacement}");
        if lexicon::is_base_verb(&candidate) {
            return Some((candidate, form));
        }

        // stopped -> stopp -> stop, running -> runn -> run
        if replacement.is_empty() && form != VerbForm::ThirdPerson {
            if let Some(single) = undouble(stem) {
                if lexicon::is_base_verb(single) {
                    return Some((single.to_string(), form));
                }
            }
        }
    }

    None
}

fn irregular_form(word: &str) -> VerbForm {
    match word {
        "is" | "has" | "does" | "goes" => VerbForm::ThirdPerson,
        "am" | "are" | "'m" | "'re" | "'ve" => VerbForm::Base,
        w if w.ends_with("ing") => VerbForm::Gerund,
        _ => VerbForm::Past,
    }
}

/// `stem` without its final letter when it ends in a doubled consonant
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;

    if last == before && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

/// Rule-based English lemmatizer in the spirit of WordNet's morphy
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lower-cased dictionary form of `word`; unknown forms come back unchanged
    pub fn lemmatize(&self, word: &str, kind: LemmaKind) -> String {
        let word = normalize(word);
        match kind {
            LemmaKind::Verb => self.verb_lemma(&word),
            LemmaKind::Nominal => self.noun_lemma(&word),
        }
    }

    fn verb_lemma(&self, word: &str) -> String {
        analyze_verb(word)
            .map(|(base, _)| base)
            .unwrap_or_else(|| word.to_string())
    }

    fn noun_lemma(&self, word: &str) -> String {
        if let Some(singular) = lexicon::irregular_noun(word) {
            return singular.to_string();
        }

        let inflectable = word.ends_with('s')
            && word.chars().count() > 3
            && word.chars().all(|c| c.is_alphabetic() || c == '-')
            && !lexicon::is_closed_class(word)
            && !["ss", "us", "is"].iter().any(|end| word.ends_with(end));

        if !inflectable {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            let with_ie = format!("{stem}ie");
            return if lexicon::is_ie_noun(&with_ie) {
                with_ie
            } else {
                format!("{stem}y")
            };
        }

        if NOUN_ES_ENDINGS.iter().any(|end| word.ends_with(end)) {
            return word[..word.len() - 2].to_string();
        }

        word[..word.len() - 1].to_string()
    }
}
