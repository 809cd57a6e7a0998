use std::io::BufRead;

use kanal::{AsyncReceiver, Sender};
use tokio::io::{AsyncWriteExt, Stdout};
use tokio_util::sync::CancellationToken;

use crate::events::{Reply, Request};
use crate::session::UserId;

/// Forward stdin lines as requests of `user` from a dedicated thread
pub fn spawn_input_reader(user: UserId, requests: Sender<Request>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        forward_lines(stdin.lock(), user, &requests);
    });
}

/// Send every non-blank line of `input` as a request, then `/quit` at end of
/// input. Returns whether the `/quit` request was delivered.
pub fn forward_lines(input: impl BufRead, user: UserId, requests: &Sender<Request>) -> bool {
    for line in input.lines() {
        let text = match line {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to read stdin: {e}");
                break;
            }
        };

        if text.trim().is_empty() {
            continue;
        }

        let request = Request {
            user: user.clone(),
            text,
        };
        if requests.send(request).is_err() {
            tracing::debug!("Event loop stopped, dropping input");
            return false;
        }
    }

    tracing::debug!("stdin closed");
    let quit = Request {
        user,
        text: "/quit".to_string(),
    };
    if requests.send(quit).is_err() {
        tracing::debug!("Event loop already stopped");
        return false;
    }

    true
}

/// Print replies until cancelled, then flush whatever is still queued
pub async fn output_loop(
    replies: AsyncReceiver<Reply>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            reply = replies.recv() => write_reply(&mut stdout, &reply?).await?,
        }
    }

    while let Ok(Some(reply)) = replies.try_recv() {
        write_reply(&mut stdout, &reply).await?;
    }

    Ok(())
}

async fn write_reply(stdout: &mut Stdout, reply: &Reply) -> anyhow::Result<()> {
    stdout.write_all(reply.text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await?;
    Ok(())
}
