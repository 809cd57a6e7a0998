use std::collections::HashMap;
use std::fmt;

use ankibot_core::{PaginationState, WordEntry};
use tokio::sync::Mutex;

pub type UserId = String;

/// Entries a user chose to keep, in the order they were added
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    entries: Vec<WordEntry>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry`; returns false and leaves the deck unchanged when an equal
    /// entry is already present
    pub fn add(&mut self, entry: WordEntry) -> bool {
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n------\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Per-user conversation state
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Word and page currently shown, set by a lookup
    pub cursor: Option<PaginationState>,
    pub deck: Deck,
}

/// In-memory sessions keyed by user, kept for the lifetime of the process
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the session of `user`, creating an empty one first if needed.
    ///
    /// The store is locked for the duration of `f`, which must not block.
    pub async fn with_session<R>(&self, user: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(user.to_string()).or_default();
        f(session)
    }

    pub async fn cursor(&self, user: &str) -> Option<PaginationState> {
        self.with_session(user, |s| s.cursor.clone()).await
    }

    #[cfg(test)]
    pub(crate) async fn users(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, definition: &str) -> WordEntry {
        WordEntry::new(word, definition, vec![]).unwrap()
    }

    #[test]
    fn test_deck_rejects_duplicates() {
        let mut deck = Deck::new();
        assert!(deck.add(entry("run", "to move fast")));
        assert!(deck.add(entry("run", "to operate")));
        assert!(!deck.add(entry("run", "to move fast")));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_deck_listing() {
        let mut deck = Deck::new();
        assert_eq!(deck.to_string(), "");

        deck.add(entry("run", "to move fast"));
        deck.add(entry("say", "to speak words"));
        assert_eq!(deck.to_string(), "run: to move fast\n------\nsay: to speak words");
    }

    #[tokio::test]
    async fn test_sessions_are_per_user() {
        let store = SessionStore::new();
        store
            .with_session("alice", |s| s.cursor = Some(PaginationState::new("run")))
            .await;

        assert_eq!(store.cursor("alice").await, Some(PaginationState::new("run")));
        assert_eq!(store.cursor("bob").await, None);
        assert_eq!(store.users().await, 2);
    }
}
