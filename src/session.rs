//! The editing session: one explicit context object tying the state
//! machine, the stage runner and the snapshot/event channels together.

use crate::config::TimingConfig;
use crate::runner::{lock_machine, SharedMachine, StageClock, StageRunner, SubmitOutcome, TokioClock};
use crate::state_machine::{
    EditorSnapshot, EditorStateMachine, SessionCommand, SessionEvent,
};
use crate::structured_logger::StructuredLogger;
use anyhow::Result;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, watch};

pub struct EditorSession {
    machine: SharedMachine,
    runner: StageRunner,
    snapshot_rx: watch::Receiver<EditorSnapshot>,
    logger: Arc<StructuredLogger>,
}

impl EditorSession {
    /// Creates a session whose stages suspend on the tokio timer.
    pub fn new(logger: Arc<StructuredLogger>, timing: TimingConfig) -> Self {
        Self::with_clock(logger, timing, Arc::new(TokioClock))
    }

    pub fn with_clock(
        logger: Arc<StructuredLogger>,
        timing: TimingConfig,
        clock: Arc<dyn StageClock>,
    ) -> Self {
        let (machine, snapshot_rx) = EditorStateMachine::new(Arc::clone(&logger));
        let machine = Arc::new(Mutex::new(machine));
        let runner = StageRunner::new(Arc::clone(&machine), clock, timing);

        Self {
            machine,
            runner,
            snapshot_rx,
            logger,
        }
    }

    /// Submits command text. Blank text and text submitted while another
    /// command is progressing are dropped.
    pub fn submit(&self, text: &str) -> Result<SubmitOutcome> {
        self.runner.run(text)
    }

    /// Resets the page and drops the newest edit. Returns false when there
    /// was nothing to undo.
    pub fn undo(&self) -> Result<bool> {
        let events = lock_machine(&self.machine).apply(SessionCommand::Undo)?;
        Ok(events
            .iter()
            .any(|e| matches!(e, SessionEvent::UndoApplied { .. })))
    }

    /// Redo is not supported; always returns false.
    pub fn redo(&self) -> Result<bool> {
        lock_machine(&self.machine).apply(SessionCommand::Redo)?;
        Ok(false)
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> EditorSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn watch(&self) -> watch::Receiver<EditorSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribes to session events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        lock_machine(&self.machine).subscribe()
    }

    pub fn logger(&self) -> &Arc<StructuredLogger> {
        &self.logger
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
