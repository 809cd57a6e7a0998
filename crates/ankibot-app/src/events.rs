use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::render;
use crate::session::UserId;
use crate::state::AppState;

pub mod add;
pub mod all;
pub mod find;
pub mod lookup;
pub mod more;

use add::handle_add;
use all::handle_all;
use find::handle_match;
use lookup::handle_lookup;
use more::handle_more;

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub user: UserId,
    pub text: String,
}

/// Text sent back to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub user: UserId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Quit,
    /// Next page of the word being looked at
    More,
    /// Show the deck
    All,
    /// 1-based definition number, as displayed
    Add(usize),
    Match {
        word: String,
        sentence: String,
    },
    Lookup(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command {0}. Type /help for the list of commands")]
    Unknown(String),

    #[error("Usage: /add N, where N is a definition number")]
    AddUsage,

    #[error("Usage: /match <word> <sentence>")]
    MatchUsage,
}

impl Command {
    /// Anything not starting with '/' is a word to look up
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let text = text.trim();
        let Some(rest) = text.strip_prefix('/') else {
            return Ok(Command::Lookup(text.to_string()));
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            "more" => Ok(Command::More),
            "all" => Ok(Command::All),
            "add" => args
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Command::Add)
                .ok_or(CommandError::AddUsage),
            "match" => {
                let (word, sentence) = args
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MatchUsage)?;
                Ok(Command::Match {
                    word: word.to_string(),
                    sentence: sentence.trim().to_string(),
                })
            }
            _ => Err(CommandError::Unknown(format!("/{name}"))),
        }
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    requests: AsyncReceiver<Request>,
    replies: AsyncSender<Reply>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for requests");

    loop {
        let request = tokio::select! {
            _ = shutdown.cancelled() => break,
            request = requests.recv() => request?,
        };

        tracing::debug!("Request from {}: '{}'", request.user, request.text);
        let quit = matches!(Command::parse(&request.text), Ok(Command::Quit));

        let text = respond(&state, &request.user, &request.text).await;
        replies
            .send(Reply {
                user: request.user,
                text,
            })
            .await?;

        if quit {
            shutdown.cancel();
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Reply text for one line of input from `user`
pub async fn respond(state: &AppState, user: &str, text: &str) -> String {
    let command = match Command::parse(text) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!("Rejected input from {user}: {e}");
            return e.to_string();
        }
    };

    match handle_command(state, user, command).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to handle '{text}' from {user}: {e:#}");
            render::FAILURE.to_string()
        }
    }
}

async fn handle_command(state: &AppState, user: &str, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Start => Ok(render::GREETING.to_string()),
        Command::Help => Ok(render::HELP.to_string()),
        Command::Quit => Ok("Bye".to_string()),
        Command::Lookup(text) => handle_lookup(state, user, &text).await,
        Command::More => handle_more(state, user).await,
        Command::Add(number) => handle_add(state, user, number).await,
        Command::All => Ok(handle_all(state, user).await),
        Command::Match { word, sentence } => Ok(handle_match(state, &word, &sentence).await),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use ankibot_config::Config;
    use ankibot_core::dictionary::Entries;
    use ankibot_core::{Dictionary, DictionaryError, ParseError, WordEntry};
    use async_trait::async_trait;
    use tokio::time::timeout;

    use super::*;

    /// In-memory dictionary; "broken" fails like a page the parser can't read
    pub(crate) struct FakeDictionary {
        pages: HashMap<String, Vec<WordEntry>>,
        pub(crate) lookups: AtomicUsize,
    }

    impl FakeDictionary {
        pub(crate) fn new() -> Self {
            let run = [
                ("to move fast on foot", vec!["She runs every morning.".to_string()]),
                ("to operate or manage", vec![]),
                ("an act of running", vec![]),
            ]
            .into_iter()
            .filter_map(|(definition, examples)| WordEntry::new("run", definition, examples))
            .collect();

            Self {
                pages: HashMap::from([("run".to_string(), run)]),
                lookups: AtomicUsize::new(0),
            }
        }

        fn check(&self, word: &str) -> Result<bool, DictionaryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if word == "broken" {
                return Err(DictionaryError::Parse {
                    word: word.to_string(),
                    source: ParseError::NoDefinitionBlocks,
                });
            }
            Ok(self.pages.contains_key(word))
        }
    }

    #[async_trait]
    impl Dictionary for FakeDictionary {
        fn name(&self) -> &str {
            "fake"
        }

        async fn exists(&self, word: &str) -> Result<bool, DictionaryError> {
            self.check(word)
        }

        async fn get_entries(&self, word: &str) -> Result<Entries, DictionaryError> {
            self.check(word)?;
            Ok(self
                .pages
                .get(word)
                .map(|entries| Entries::from(entries.as_slice()))
                .unwrap_or_else(|| Vec::new().into()))
        }
    }

    pub(crate) fn state_with(config: Config) -> (AppState, Arc<FakeDictionary>) {
        let fake = Arc::new(FakeDictionary::new());
        let state = AppState::with_dictionary(config, fake.clone()).unwrap();
        (state, fake)
    }

    /// Two definitions per page over [`FakeDictionary`]
    pub(crate) fn state() -> AppState {
        let mut config = Config::default();
        config.bot.words_per_page = 2;
        state_with(config).0
    }

    #[test]
    fn test_parse_plain_text_is_lookup() {
        assert_eq!(Command::parse("  run "), Ok(Command::Lookup("run".into())));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/more"), Ok(Command::More));
        assert_eq!(Command::parse("/all"), Ok(Command::All));
        assert_eq!(Command::parse("/start"), Ok(Command::Start));
        assert_eq!(Command::parse("/add 3"), Ok(Command::Add(3)));
        assert_eq!(
            Command::parse("/match run He runs fast."),
            Ok(Command::Match {
                word: "run".into(),
                sentence: "He runs fast.".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert_eq!(Command::parse("/add"), Err(CommandError::AddUsage));
        assert_eq!(Command::parse("/add 0"), Err(CommandError::AddUsage));
        assert_eq!(Command::parse("/add two"), Err(CommandError::AddUsage));
        assert_eq!(Command::parse("/match run"), Err(CommandError::MatchUsage));
        assert_eq!(
            Command::parse("/fly away"),
            Err(CommandError::Unknown("/fly".into()))
        );
    }

    #[tokio::test]
    async fn test_unknown_command_reply() {
        let state = state();
        let reply = respond(&state, "u", "/fly").await;
        assert_eq!(reply, "Unknown command /fly. Type /help for the list of commands");
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() {
        let state = Arc::new(state());
        let (req_tx, req_rx) = kanal::bounded_async(4);
        let (reply_tx, reply_rx) = kanal::bounded_async(4);
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(event_loop(state, req_rx, reply_tx, shutdown.clone()));

        for text in ["run", "/quit"] {
            req_tx
                .send(Request {
                    user: "u".into(),
                    text: text.into(),
                })
                .await
                .expect("send failed");
        }

        let first = timeout(Duration::from_secs(2), reply_rx.recv())
            .await
            .expect("no reply")
            .expect("channel closed");
        assert!(first.text.starts_with("1. run: to move fast on foot"));

        let bye = timeout(Duration::from_secs(2), reply_rx.recv())
            .await
            .expect("no reply")
            .expect("channel closed");
        assert_eq!(bye.text, "Bye");

        let result = timeout(Duration::from_secs(2), handle)
            .await
            .expect("loop did not stop")
            .expect("loop panicked");
        assert!(result.is_ok());
        assert!(shutdown.is_cancelled());
    }
}
