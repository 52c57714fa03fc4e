use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gloss_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "gloss", version, about = "Look up English word definitions")]
struct Args {
    /// JSON config file, overrides GLOSS_* environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word to look up immediately
    #[arg(long)]
    word: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr, stdout belongs to the popup
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    tracing::debug!("Using dictionary API {}", config.dictionary.api_url);

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks(args.word).await?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("event loop exited"),
                Ok(Err(e)) => tracing::error!("event loop failed: {e}"),
                Err(e) => tracing::error!("event loop panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e}");
        }
    }

    Ok(())
}
