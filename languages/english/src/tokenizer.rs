use ankibot_core::Token;

/// Clitics split off the end of a word, Penn Treebank style ("don't" -> "do" "n't")
const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || "“”‘’«»—–…¡¿„".contains(c)
}

/// Lower-case with typographic apostrophes folded to ASCII
pub fn normalize(surface: &str) -> String {
    surface.to_lowercase().replace('’', "'")
}

fn token(surface: &str, position: usize) -> Token {
    Token {
        surface: surface.to_string(),
        normalized: normalize(surface),
        position,
    }
}

/// Split English text into word, clitic and punctuation tokens.
///
/// Positions are byte offsets into `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                split_chunk(&text[s..i], s, &mut tokens);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        split_chunk(&text[s..], s, &mut tokens);
    }

    tokens
}

/// Byte length of the run of `c` at the start of `s`
fn leading_run(s: &str, c: char) -> usize {
    s.chars().take_while(|&x| x == c).count() * c.len_utf8()
}

/// Byte length of the run of `c` at the end of `s`
fn trailing_run(s: &str, c: char) -> usize {
    s.chars().rev().take_while(|&x| x == c).count() * c.len_utf8()
}

fn split_chunk(chunk: &str, offset: usize, out: &mut Vec<Token>) {
    let mut begin = 0;
    let mut end = chunk.len();

    while let Some(c) = chunk[begin..end].chars().next() {
        if !is_punctuation(c) {
            break;
        }
        let run = leading_run(&chunk[begin..end], c);
        out.push(token(&chunk[begin..begin + run], offset + begin));
        begin += run;
    }

    let mut trailing = Vec::new();
    while let Some(c) = chunk[begin..end].chars().next_back() {
        if !is_punctuation(c) {
            break;
        }
        let core = &chunk[begin..end];
        let run = trailing_run(core, c);
        // Abbreviations such as "U.S." keep their final period
        if c == '.' && run == 1 && core[..core.len() - 1].contains('.') {
            break;
        }
        trailing.push(end - run..end);
        end -= run;
    }

    if begin < end {
        split_clitic(&chunk[begin..end], offset + begin, out);
    }

    for range in trailing.into_iter().rev() {
        out.push(token(&chunk[range.clone()], offset + range.start));
    }
}

fn split_clitic(word: &str, offset: usize, out: &mut Vec<Token>) {
    if word.eq_ignore_ascii_case("cannot") {
        out.push(token(&word[..3], offset));
        out.push(token(&word[3..], offset + 3));
        return;
    }

    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let split = word.len() - clitic.len();
        if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(clitic) {
            out.push(token(&word[..split], offset));
            out.push(token(&word[split..], offset + split));
            return;
        }
    }

    out.push(token(word, offset));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.surface).collect()
    }

    #[test]
    fn test_splits_punctuation() {
        assert_eq!(
            surfaces("Say what again; said goodbye to all her friends and left."),
            vec![
                "Say", "what", "again", ";", "said", "goodbye", "to", "all", "her", "friends",
                "and", "left", "."
            ]
        );
    }

    #[test]
    fn test_splits_clitics() {
        assert_eq!(
            surfaces("I don't think he's here, we'll see."),
            vec!["I", "do", "n't", "think", "he", "'s", "here", ",", "we", "'ll", "see", "."]
        );
        assert_eq!(surfaces("They can't"), vec!["They", "ca", "n't"]);
        assert_eq!(surfaces("You cannot"), vec!["You", "can", "not"]);
        assert_eq!(surfaces("it’s"), vec!["it", "’s"]);
    }

    #[test]
    fn test_keeps_abbreviations_and_hyphens() {
        assert_eq!(
            surfaces("The U.S. mother-in-law..."),
            vec!["The", "U.S.", "mother-in-law", "..."]
        );
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            surfaces("\"Run!\" (he said)"),
            vec!["\"", "Run", "!", "\"", "(", "he", "said", ")"]
        );
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let text = "Café  runs, fast";
        for token in tokenize(text) {
            assert_eq!(
                &text[token.position..token.position + token.surface.len()],
                token.surface
            );
        }
    }

    #[test]
    fn test_normalized_form() {
        let tokens = tokenize("He’S");
        assert_eq!(tokens[1].normalized, "'s");
        assert_eq!(tokens[0].normalized, "he");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}
