mod app;
mod config;
mod content;
mod domain;
mod history;
mod ledger;
mod mutation;
mod runner;
mod session;
mod state;
mod state_machine;
mod structured_logger;
mod view;

use anyhow::Result;
use app::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENTIC_EDITOR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    app::run(cli).await
}
