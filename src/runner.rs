//! Drives a submitted command through its four stages.
//!
//! Each stage suspends on a `StageClock` for a sampled latency. The
//! suspension is the only yield point; every state change in between
//! goes through the state machine under its lock, so observers never see
//! a half-applied transition.

use crate::config::TimingConfig;
use crate::domain::CommandId;
use crate::ledger::{CommandEntry, StageKind, EXECUTE_STAGE_INDEX};
use crate::state_machine::{EditorStateMachine, RejectReason, SessionCommand, SessionEvent};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// The state machine shared between the runner task and the caller.
pub type SharedMachine = Arc<Mutex<EditorStateMachine>>;

/// Locks the shared machine. A panic while holding the lock cannot leave
/// the machine half-updated, so a poisoned lock is still usable.
pub fn lock_machine(machine: &SharedMachine) -> MutexGuard<'_, EditorStateMachine> {
    machine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Source of the simulated per-stage suspension.
#[async_trait]
pub trait StageClock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Suspends on the tokio timer.
#[derive(Debug, Clone, Default)]
pub struct TokioClock;

#[async_trait]
impl StageClock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Result of handing text to the runner.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The command is progressing; await the handle for the final entry.
    Accepted(RunHandle),
    /// Nothing was created.
    Rejected(RejectReason),
}

/// Handle to one in-flight command run.
#[derive(Debug)]
pub struct RunHandle {
    command_id: CommandId,
    task: JoinHandle<Result<CommandEntry>>,
}

impl RunHandle {
    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    /// Waits for all four stages and returns the completed entry.
    pub async fn wait(self) -> Result<CommandEntry> {
        self.task.await.context("stage runner task panicked")?
    }
}

#[derive(Clone)]
pub struct StageRunner {
    machine: SharedMachine,
    clock: Arc<dyn StageClock>,
    timing: TimingConfig,
}

impl StageRunner {
    pub fn new(machine: SharedMachine, clock: Arc<dyn StageClock>, timing: TimingConfig) -> Self {
        Self {
            machine,
            clock,
            timing,
        }
    }

    /// Submits `text` and, if accepted, spawns the stage progression.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&self, text: &str) -> Result<SubmitOutcome> {
        let events = self.apply(SessionCommand::Submit {
            text: text.to_string(),
        })?;

        match events.first() {
            Some(SessionEvent::CommandAccepted { command_id, .. }) => {
                let command_id = *command_id;
                let runner = self.clone();
                let task = tokio::spawn(async move { runner.drive(command_id).await });
                Ok(SubmitOutcome::Accepted(RunHandle { command_id, task }))
            }
            Some(SessionEvent::SubmissionRejected { reason }) => {
                tracing::debug!(?reason, "submission dropped");
                Ok(SubmitOutcome::Rejected(*reason))
            }
            other => bail!("unexpected outcome for submit: {:?}", other),
        }
    }

    async fn drive(self, command_id: CommandId) -> Result<CommandEntry> {
        for index in 0..StageKind::ALL.len() {
            self.apply(SessionCommand::StartStage { command_id, index })?;

            let latency = self.timing.stage_latency_ms.sample();
            tracing::debug!(%command_id, index, ?latency, "stage processing");
            self.clock.sleep(latency).await;

            if index == EXECUTE_STAGE_INDEX {
                self.apply(SessionCommand::ApplyEdits { command_id })?;
            }

            self.apply(SessionCommand::CompleteStage {
                command_id,
                index,
                duration_ms: self.timing.stage_duration_ms.sample_ms(),
            })?;
        }

        self.apply(SessionCommand::FinishCommand { command_id })?;
        tracing::info!(%command_id, "command completed");
        self.entry(command_id)
    }

    fn apply(&self, command: SessionCommand) -> Result<Vec<SessionEvent>> {
        lock_machine(&self.machine).apply(command)
    }

    fn entry(&self, command_id: CommandId) -> Result<CommandEntry> {
        lock_machine(&self.machine)
            .state()
            .ledger()
            .get(command_id)
            .cloned()
            .ok_or_else(|| anyhow!("command {} vanished from the ledger", command_id))
    }
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
