use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{Reply, Request, event_loop};
use crate::io::{output_loop, spawn_input_reader};
use crate::session::UserId;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub requests: (AsyncSender<Request>, AsyncReceiver<Request>),
    pub replies: (AsyncSender<Reply>, AsyncReceiver<Reply>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            requests: kanal::bounded_async(64),
            replies: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the console session of `user`. The stdin reader runs on its own
    /// thread and is not part of the returned set.
    pub fn spawn_tasks(&self, user: UserId) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        spawn_input_reader(user, self.channels.requests.0.clone_sync());

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.requests.1.clone(),
            self.channels.replies.0.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(output_loop(
            self.channels.replies.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Resolves once a user asked to quit or `shutdown` was called
    pub async fn stopped(&self) {
        self.cancel_token.cancelled().await
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn test_blocking_thread_reaches_async_receiver() {
        let channels = ChannelSet::new();
        let tx = channels.requests.0.clone_sync();

        std::thread::spawn(move || {
            for i in 0..10 {
                tx.send(Request {
                    user: "u".into(),
                    text: format!("word{i}"),
                })
                .expect("send failed");
            }
        });

        let mut received = Vec::new();
        let result = timeout(Duration::from_secs(2), async {
            while received.len() < 10 {
                received.push(channels.requests.1.recv().await.expect("recv failed").text);
            }
        })
        .await;

        assert!(result.is_ok(), "Timeout waiting for requests!");
        assert_eq!(received.first().map(String::as_str), Some("word0"));
        assert_eq!(received.last().map(String::as_str), Some("word9"));
    }
}
