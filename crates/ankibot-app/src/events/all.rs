use crate::render;
use crate::state::AppState;

pub async fn handle_all(state: &AppState, user: &str) -> String {
    let deck = state
        .sessions
        .with_session(user, |session| session.deck.clone())
        .await;

    if deck.is_empty() {
        render::EMPTY_DECK.to_string()
    } else {
        deck.to_string()
    }
}
