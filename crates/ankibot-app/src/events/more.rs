use crate::render;
use crate::state::AppState;

/// Advance the user's cursor and show the next page
pub async fn handle_more(state: &AppState, user: &str) -> anyhow::Result<String> {
    let cursor = state
        .sessions
        .with_session(user, |session| {
            let cursor = session.cursor.as_mut()?;
            cursor.advance();
            Some(cursor.clone())
        })
        .await;

    let Some(cursor) = cursor else {
        return Ok(render::NO_WORD.to_string());
    };

    let entries = state.dictionary.get_entries(&cursor.word).await?;
    Ok(render::page(&state.cursor.page(&entries, cursor.page)))
}
