use ankibot_core::{ParseError, WordEntry};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

static HEADWORD: Lazy<Selector> = Lazy::new(|| selector("span.hw.dhw"));
static DEFINITION_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.def-block.ddef_block"));
static DEFINITION: Lazy<Selector> = Lazy::new(|| selector("div.def.ddef_d.db"));
static EXAMPLE: Lazy<Selector> = Lazy::new(|| selector("span.eg.deg"));

/// Parse a Cambridge word page into its entries, in document order.
///
/// `word` is used as the headword when the page carries none. A page without
/// any definition block means the markup changed under us and is an error,
/// never an empty result.
pub fn parse_entries(html: &str, word: &str) -> Result<Vec<WordEntry>, ParseError> {
    let document = Html::parse_document(html);

    let headword = document
        .select(&HEADWORD)
        .next()
        .map(element_text)
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| word.to_string());

    let blocks: Vec<ElementRef> = document.select(&DEFINITION_BLOCK).collect();
    if blocks.is_empty() {
        return Err(ParseError::NoDefinitionBlocks);
    }

    blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let definition = block
                .select(&DEFINITION)
                .next()
                .map(|d| clean_definition(&element_text(d)))
                .unwrap_or_default();

            let examples = block
                .select(&EXAMPLE)
                .map(element_text)
                .filter(|e| !e.is_empty())
                .collect();

            WordEntry::new(headword.clone(), definition, examples)
                .ok_or(ParseError::MissingDefinition { index })
        })
        .collect()
}

/// All text below `element` with whitespace runs collapsed
fn element_text(element: ElementRef) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Definitions end with a colon leading into the examples
fn clean_definition(text: &str) -> String {
    let text = text.trim_end();
    text.strip_suffix(|c: char| c.is_ascii_punctuation())
        .unwrap_or(text)
        .trim_end()
        .to_string()
}
