//! Line-oriented interactive prompt.
//!
//! Input and live stage progress are multiplexed on one task: a line is
//! dispatched as soon as it arrives, and progress events are printed as
//! the stage runner emits them.

use super::dispatch::{dispatch, quick_command_list, Dispatch};
use super::input::parse_input;
use crate::config::EditorConfig;
use crate::session::EditorSession;
use crate::state_machine::SessionEvent;
use crate::view::Renderer;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

const PROMPT: &str = "editor> ";

fn prompt() {
    print!("{}", PROMPT);
    let _ = std::io::stdout().flush();
}

pub async fn run_interactive(
    session: &EditorSession,
    config: &EditorConfig,
    renderer: &Renderer,
) -> Result<()> {
    let mut events = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", renderer.full(&session.snapshot()));
    println!("\nQuick commands:\n{}", quick_command_list(config));
    println!("Type /help for commands.");
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                session.logger().log_user_input(&line);
                match dispatch(session, config, renderer, parse_input(&line))? {
                    Dispatch::Started(handle) => {
                        tokio::spawn(async move {
                            if let Err(e) = handle.wait().await {
                                tracing::error!("command run failed: {:#}", e);
                            }
                        });
                    }
                    Dispatch::Handled => {}
                    Dispatch::Quit => break,
                }
                prompt();
            }
            event = events.recv() => match event {
                Ok(event) => {
                    println!("\r{}", renderer.event_line(&event));
                    if matches!(event, SessionEvent::CommandCompleted { .. }) {
                        print!("{}", renderer.preview(&session.snapshot().content));
                        prompt();
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "progress output fell behind");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    // Runs are never cancelled; let an in-flight command finish.
    let mut snapshots = session.watch();
    if snapshots.borrow().processing {
        println!("Waiting for the current command to finish...");
        snapshots.wait_for(|s| !s.processing).await?;
    }
    Ok(())
}
