use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod render;
pub mod session;
pub mod state;

use self::controller::AppController;
use self::state::AppState;

/// Look up English words and collect definitions into a deck
#[derive(Debug, Parser)]
#[command(name = "ankibot", version)]
struct Args {
    /// JSON config file (defaults to ./config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session owner, each user has their own cursor and deck
    #[arg(short, long, default_value = "console")]
    user: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = profile::load_config(args.config.as_deref())?;
    let state = Arc::new(AppState::new(config)?);

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(args.user);

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        _ = controller.stopped() => {
            tracing::info!("Session closed");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("task ended with: {e}");
        }
    }

    Ok(())
}
