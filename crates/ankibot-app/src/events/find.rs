use crate::state::AppState;

/// Locate a form of `word` in `sentence` with the configured language
pub async fn handle_match(state: &AppState, word: &str, sentence: &str) -> String {
    let language = state.config.read().await.bot.language.clone();

    match state.matcher.find_lemma(word, sentence, &language) {
        Ok(Some(span)) => format!(
            "Found *{}* at {}..{}",
            span.extract(sentence),
            span.start,
            span.end
        ),
        Ok(None) => format!("Could not find {word} in this sentence"),
        Err(e) => {
            tracing::warn!("Lemma matching failed: {e}");
            e.to_string()
        }
    }
}
