//! Centralized state machine for the editing session.
//!
//! This module provides the ONLY place where session state changes.
//! The state machine owns the state, validates commands, emits events,
//! and broadcasts snapshots to subscribers via a watch channel.

mod commands;
mod events;
mod snapshot;

pub use commands::SessionCommand;
pub use events::{RejectReason, SessionEvent};
pub use snapshot::EditorSnapshot;

use crate::domain::{CommandId, EditorError, TimestampUtc};
use crate::ledger::{CommandEntry, CommandStatus, StageStatus, EXECUTE_STAGE_INDEX};
use crate::mutation::MutationEngine;
use crate::state::EditorState;
use crate::structured_logger::StructuredLogger;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Capacity of the event broadcast channel. Slow subscribers lag rather
/// than block the session.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// The ONLY place state transitions happen.
/// Owns the state, validates commands, emits events, broadcasts snapshots.
pub struct EditorStateMachine {
    state: EditorState,
    snapshot_tx: watch::Sender<EditorSnapshot>,
    events_tx: broadcast::Sender<SessionEvent>,
    logger: Arc<StructuredLogger>,
    seq: u64,
}

impl EditorStateMachine {
    /// Creates a new state machine with default content and empty logs.
    ///
    /// Returns the state machine and a watch receiver for state snapshots.
    pub fn new(logger: Arc<StructuredLogger>) -> (Self, watch::Receiver<EditorSnapshot>) {
        let state = EditorState::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(EditorSnapshot::from(&state));
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let machine = Self {
            state,
            snapshot_tx,
            events_tx,
            logger,
            seq: 0,
        };

        (machine, snapshot_rx)
    }

    /// All mutations go through this single method.
    /// Returns events for logging; broadcasts events and a snapshot.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Vec<SessionEvent>> {
        self.seq += 1;
        self.logger.log_command(self.seq, &command);

        let events = match self.apply_internal(command) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(seq = self.seq, "rejected session command: {}", err);
                self.logger.log_rejection(self.seq, &err);
                return Err(err.into());
            }
        };

        for event in &events {
            self.logger.log_event(self.seq, event);
            // No subscribers is fine.
            let _ = self.events_tx.send(event.clone());
        }

        let _ = self.snapshot_tx.send(EditorSnapshot::from(&self.state));

        Ok(events)
    }

    fn apply_internal(
        &mut self,
        command: SessionCommand,
    ) -> std::result::Result<Vec<SessionEvent>, EditorError> {
        use SessionCommand::*;
        use SessionEvent::*;

        match command {
            Submit { text } => {
                if text.trim().is_empty() {
                    return Ok(vec![SubmissionRejected {
                        reason: RejectReason::Empty,
                    }]);
                }
                if self.state.in_flight.is_some() {
                    return Ok(vec![SubmissionRejected {
                        reason: RejectReason::Busy,
                    }]);
                }
                let command_id = self
                    .state
                    .ledger
                    .submit(CommandEntry::new(&text, TimestampUtc::now()))
                    .id;
                self.state.in_flight = Some(command_id);
                self.logger.increment_run_id();
                Ok(vec![CommandAccepted { command_id, text }])
            }

            StartStage { command_id, index } => {
                let entry = self.in_flight_entry(command_id)?;
                if entry.next_stage_index() != Some(index)
                    || entry.stages[index].status != StageStatus::Pending
                {
                    return Err(invalid(format!(
                        "cannot start stage {} of {}; next pending stage is {:?}",
                        index,
                        command_id,
                        entry.next_stage_index()
                    )));
                }
                let stage = &mut entry.stages[index];
                stage.status = StageStatus::Processing;
                Ok(vec![StageStarted {
                    command_id,
                    index,
                    stage: stage.kind,
                }])
            }

            ApplyEdits { command_id } => {
                let text = {
                    let entry = self.in_flight_entry(command_id)?;
                    if entry.stages[EXECUTE_STAGE_INDEX].status != StageStatus::Processing {
                        return Err(invalid(format!(
                            "edits for {} can only be applied while the execute stage is processing",
                            command_id
                        )));
                    }
                    entry.text.clone()
                };
                let created =
                    MutationEngine::new(&mut self.state.content, &mut self.state.history)
                        .apply(&text, TimestampUtc::now());
                Ok(created
                    .into_iter()
                    .map(|entry| EditApplied { command_id, entry })
                    .collect())
            }

            CompleteStage {
                command_id,
                index,
                duration_ms,
            } => {
                let entry = self.in_flight_entry(command_id)?;
                let stage = match entry.stages.get_mut(index) {
                    Some(stage) if stage.status == StageStatus::Processing => stage,
                    _ => {
                        return Err(invalid(format!(
                            "stage {} of {} is not processing",
                            index, command_id
                        )))
                    }
                };
                stage.status = StageStatus::Completed;
                stage.duration_ms = Some(duration_ms);
                Ok(vec![StageCompleted {
                    command_id,
                    index,
                    stage: stage.kind,
                    duration_ms,
                }])
            }

            FinishCommand { command_id } => {
                let entry = self.in_flight_entry(command_id)?;
                if !entry.all_stages_completed() {
                    return Err(invalid(format!(
                        "{} still has stage {:?} outstanding",
                        command_id,
                        entry.next_stage_index()
                    )));
                }
                entry.status = CommandStatus::Completed;
                self.state.in_flight = None;
                Ok(vec![CommandCompleted { command_id }])
            }

            Undo => {
                let Some(entry) = self.state.history.pop_latest() else {
                    return Ok(vec![NothingToUndo]);
                };
                // Undo restores every region, not just the undone entry's target.
                self.state.content.reset();
                Ok(vec![UndoApplied { entry }])
            }

            Redo => Ok(vec![RedoRejected]),
        }
    }

    /// The ledger entry of the in-flight command, if `command_id` is it.
    fn in_flight_entry(
        &mut self,
        command_id: CommandId,
    ) -> std::result::Result<&mut CommandEntry, EditorError> {
        if self.state.in_flight != Some(command_id) {
            return Err(invalid(format!("{} is not in flight", command_id)));
        }
        self.state
            .ledger
            .get_mut(command_id)
            .ok_or_else(|| EditorError::UnknownCommand {
                command_id: command_id.to_string(),
            })
    }

    /// Returns immutable reference to current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Subscribes to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }
}

fn invalid(message: String) -> EditorError {
    EditorError::InvalidTransition { message }
}
