use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AGENTIC_EDITOR_GIT_SHA"),
    ")"
);

#[derive(Parser)]
#[command(name = "agentic-editor")]
#[command(about = "Conversational website editor driven by a four-stage agent pipeline")]
#[command(version = VERSION)]
pub struct Cli {
    /// Commands to run in order, then exit. Slash commands such as /undo
    /// are accepted. Without commands an interactive prompt starts.
    #[arg(trailing_var_arg = true)]
    pub commands: Vec<String>,

    /// Path to an editor.yaml overriding the built-in configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the structured event log
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Run headless even without commands: print the final panels and exit
    #[arg(long)]
    pub headless: bool,

    /// Skip the simulated per-stage latency
    #[arg(long)]
    pub fast: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}
