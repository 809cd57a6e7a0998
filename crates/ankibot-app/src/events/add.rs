use crate::render;
use crate::state::AppState;

/// Add definition `number` (1-based, as displayed) of the current word to the deck
pub async fn handle_add(state: &AppState, user: &str, number: usize) -> anyhow::Result<String> {
    let Some(cursor) = state.sessions.cursor(user).await else {
        return Ok(render::NO_WORD.to_string());
    };

    let entries = state.dictionary.get_entries(&cursor.word).await?;
    let Some(entry) = number.checked_sub(1).and_then(|i| entries.get(i)) else {
        return Ok(format!("There is no definition number {number}"));
    };

    let definition = entry.definition().to_string();
    let entry = entry.clone();
    let added = state
        .sessions
        .with_session(user, |session| session.deck.add(entry))
        .await;

    if !added {
        return Ok(render::DUPLICATE.to_string());
    }

    tracing::info!("{user} added '{}' #{number} to their deck", cursor.word);
    Ok(render::added(&definition))
}
