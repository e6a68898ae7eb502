//! Runs a fixed list of inputs to completion, printing progress.

use super::dispatch::{dispatch, Dispatch};
use super::input::parse_input;
use crate::config::EditorConfig;
use crate::domain::CommandId;
use crate::session::EditorSession;
use crate::state_machine::SessionEvent;
use crate::view::Renderer;
use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

pub async fn run_headless(
    session: &EditorSession,
    config: &EditorConfig,
    renderer: &Renderer,
    inputs: &[String],
) -> Result<()> {
    let mut events = session.subscribe();

    for line in inputs {
        match dispatch(session, config, renderer, parse_input(line))? {
            Dispatch::Started(handle) => {
                print_until_completed(&mut events, handle.command_id(), renderer).await?;
                handle
                    .wait()
                    .await
                    .with_context(|| format!("command failed: {}", line))?;
            }
            Dispatch::Handled => print_pending(&mut events, renderer),
            Dispatch::Quit => break,
        }
    }

    println!();
    print!("{}", renderer.full(&session.snapshot()));
    Ok(())
}

async fn print_until_completed(
    events: &mut broadcast::Receiver<SessionEvent>,
    command_id: CommandId,
    renderer: &Renderer,
) -> Result<()> {
    loop {
        match events.recv().await {
            Ok(event) => {
                println!("{}", renderer.event_line(&event));
                if matches!(event, SessionEvent::CommandCompleted { command_id: id } if id == command_id)
                {
                    return Ok(());
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "progress output fell behind");
            }
            Err(RecvError::Closed) => anyhow::bail!("session closed while {} was running", command_id),
        }
    }
}

/// Prints events already emitted by a synchronous action.
fn print_pending(events: &mut broadcast::Receiver<SessionEvent>, renderer: &Renderer) {
    while let Ok(event) = events.try_recv() {
        println!("{}", renderer.event_line(&event));
    }
}

#[cfg(test)]
#[path = "tests/headless_tests.rs"]
mod tests;
