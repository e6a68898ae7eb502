pub mod cli;
pub mod dispatch;
pub mod headless;
pub mod input;
pub mod interactive;

use crate::config::{EditorConfig, TimingConfig};
use crate::session::EditorSession;
use crate::structured_logger::StructuredLogger;
use crate::view::Renderer;
use anyhow::{Context, Result};
use cli::Cli;
use std::io::IsTerminal;
use std::sync::Arc;
use uuid::Uuid;

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default_config(),
    };
    if cli.fast {
        config.timing.stage_latency_ms = TimingConfig::instant().stage_latency_ms;
    }

    let session_id = Uuid::new_v4().to_string();
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| config.log_dir(&session_id));
    let logger = Arc::new(
        StructuredLogger::new(&session_id, &log_dir)
            .with_context(|| format!("Failed to open event log in {}", log_dir.display()))?,
    );
    tracing::info!(
        session_id = logger.session_id(),
        log = %logger.path().display(),
        "session started"
    );

    let session = EditorSession::new(Arc::clone(&logger), config.timing);
    let renderer = Renderer::new(!cli.no_color && std::io::stdout().is_terminal());

    if cli.headless || !cli.commands.is_empty() {
        headless::run_headless(&session, &config, &renderer, &cli.commands).await
    } else {
        interactive::run_interactive(&session, &config, &renderer).await
    }
}
