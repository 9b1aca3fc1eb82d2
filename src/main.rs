#![forbid(unsafe_code)]

//! `draft-watch`: one-shot draft status checker.
//!
//! Loads configuration, fetches the league page once, and posts to the
//! webhook when the on-the-clock message changed since the last run. Meant
//! to be invoked periodically by an external scheduler.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use draft_watch::cli::{Cli, LogFormat};
use draft_watch::config::GlobalConfig;
use draft_watch::notify::{Notifier, WebhookNotifier};
use draft_watch::orchestrator::{RunMode, RunOutcome, Watcher};
use draft_watch::page::HttpStatusSource;
use draft_watch::{AppError, Result};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    let mode = args.run_mode();
    let mut config = GlobalConfig::load_from_path(&args.config)?;
    if let Some(state) = args.state {
        config.state_path = state;
    }

    // Abort before any network call when the destination is missing.
    if mode == RunMode::Notify {
        config.load_credentials().map_err(|err| {
            error!(%err, "notification destination missing");
            err
        })?;
    }
    info!(?mode, url = %config.league_url, "configuration loaded");

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(&config, mode))
}

async fn run(config: &GlobalConfig, mode: RunMode) -> Result<()> {
    let source = Arc::new(HttpStatusSource::new(config)?);
    let notifier: Option<Arc<dyn Notifier>> = match mode {
        RunMode::Notify => Some(Arc::new(WebhookNotifier::new(config)?)),
        RunMode::DryRun | RunMode::RecordOnly => None,
    };

    let watcher = Watcher::new(config, source, notifier)?;
    let outcome = watcher.run_once(mode).await.map_err(|err| {
        error!(%err, "run failed");
        err
    })?;

    match &outcome {
        RunOutcome::Unchanged(_) => info!("no change detected"),
        RunOutcome::Notified(_) => info!("change detected, notification sent"),
        RunOutcome::Recorded(_) => info!("change recorded without notification"),
        RunOutcome::Preview(message) => println!("{message}"),
    }
    Ok(())
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
