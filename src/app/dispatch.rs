//! Executes one parsed input against the session.

use super::input::{help_text, EditorInput};
use crate::config::EditorConfig;
use crate::runner::{RunHandle, SubmitOutcome};
use crate::session::EditorSession;
use crate::view::Renderer;
use anyhow::Result;

#[derive(Debug)]
pub enum Dispatch {
    /// A command was accepted and is progressing.
    Started(RunHandle),
    /// The input was handled synchronously (including silent rejections).
    Handled,
    Quit,
}

pub fn dispatch(
    session: &EditorSession,
    config: &EditorConfig,
    renderer: &Renderer,
    input: EditorInput,
) -> Result<Dispatch> {
    match input {
        EditorInput::Submit(text) => submit(session, &text),
        EditorInput::Quick(Some(n)) => match n.checked_sub(1).and_then(|i| config.quick_commands.get(i)) {
            Some(text) => submit(session, text),
            None => {
                println!(
                    "No quick command {}; there are {}",
                    n,
                    config.quick_commands.len()
                );
                Ok(Dispatch::Handled)
            }
        },
        EditorInput::Quick(None) => {
            println!("{}", quick_command_list(config));
            Ok(Dispatch::Handled)
        }
        EditorInput::Undo => {
            session.undo()?;
            Ok(Dispatch::Handled)
        }
        EditorInput::Redo => {
            session.redo()?;
            Ok(Dispatch::Handled)
        }
        EditorInput::Preview => print_panel(renderer.preview(&session.snapshot().content)),
        EditorInput::Workflow => print_panel(renderer.workflow(&session.snapshot())),
        EditorInput::History => print_panel(renderer.history(&session.snapshot())),
        EditorInput::Commands => print_panel(renderer.commands(&session.snapshot())),
        EditorInput::Status => print_panel(renderer.full(&session.snapshot())),
        EditorInput::Help => print_panel(help_text()),
        EditorInput::Quit => Ok(Dispatch::Quit),
        EditorInput::Unknown(text) => {
            println!("Unknown command: {} (try /help)", text);
            Ok(Dispatch::Handled)
        }
    }
}

fn submit(session: &EditorSession, text: &str) -> Result<Dispatch> {
    Ok(match session.submit(text)? {
        SubmitOutcome::Accepted(handle) => Dispatch::Started(handle),
        // The rejection event reports it to the user.
        SubmitOutcome::Rejected(reason) => {
            tracing::debug!(?reason, "submission rejected");
            Dispatch::Handled
        }
    })
}

fn print_panel(panel: String) -> Result<Dispatch> {
    print!("{}", panel);
    Ok(Dispatch::Handled)
}

pub fn quick_command_list(config: &EditorConfig) -> String {
    if config.quick_commands.is_empty() {
        return "No quick commands configured".to_string();
    }
    config
        .quick_commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("  /quick {}  {}", i + 1, cmd))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
