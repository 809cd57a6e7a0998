use ankibot_core::PaginationState;
use ankibot_core::preprocess::Preprocessor;

use crate::render;
use crate::state::AppState;

/// Look up a word and show its first page, replacing the user's cursor
pub async fn handle_lookup(state: &AppState, user: &str, text: &str) -> anyhow::Result<String> {
    let word = state.preprocessor.process(text);
    if !state.preprocessor.is_valid_query(&word) {
        tracing::warn!("Incorrect input from {user}: '{text}'");
        return Ok(render::INCORRECT_INPUT.to_string());
    }

    if !state.dictionary.exists(&word).await? {
        tracing::info!("'{word}' not found in {}", state.dictionary.name());
        return Ok(render::not_found(&word));
    }

    let entries = state.dictionary.get_entries(&word).await?;
    let cursor = PaginationState::new(word);
    let text = render::page(&state.cursor.page(&entries, cursor.page));

    state
        .sessions
        .with_session(user, |session| session.cursor = Some(cursor))
        .await;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use ankibot_config::Config;

    use crate::events::respond;
    use crate::events::tests::{state, state_with};
    use crate::render;

    #[tokio::test]
    async fn test_lookup_shows_first_page() {
        let state = state();
        let reply = respond(&state, "u", "run").await;
        assert_eq!(
            reply,
            "1. run: to move fast on foot\n  - She runs every morning.\n***\n\
             2. run: to operate or manage\n\nType /more to show more"
        );
        assert_eq!(state.sessions.cursor("u").await.map(|c| c.word), Some("run".into()));
    }

    #[tokio::test]
    async fn test_lookup_normalizes_input() {
        let state = state();
        let reply = respond(&state, "u", "  ｒｕｎ ").await;
        assert!(reply.starts_with("1. run:"));
    }

    #[tokio::test]
    async fn test_unknown_word() {
        let state = state();
        assert_eq!(respond(&state, "u", "xyzzy").await, "xyzzy not found.");
        assert_eq!(state.sessions.cursor("u").await, None);
    }

    #[tokio::test]
    async fn test_incorrect_input_skips_dictionary() {
        let (state, fake) = state_with(Config::default());
        let long = "a".repeat(65);
        for text in ["", "run?", "../etc/passwd", long.as_str()] {
            assert_eq!(respond(&state, "u", text).await, render::INCORRECT_INPUT);
        }
        assert_eq!(fake.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dictionary_failure_is_generic() {
        let state = state();
        let reply = respond(&state, "u", "broken").await;
        assert_eq!(reply, render::FAILURE);
        assert!(!reply.contains("definition blocks"));
    }

    #[tokio::test]
    async fn test_new_lookup_resets_cursor() {
        let state = state();
        respond(&state, "u", "run").await;
        respond(&state, "u", "/more").await;
        assert_eq!(state.sessions.cursor("u").await.map(|c| c.page), Some(1));

        respond(&state, "u", "run").await;
        assert_eq!(state.sessions.cursor("u").await.map(|c| c.page), Some(0));
    }
}
