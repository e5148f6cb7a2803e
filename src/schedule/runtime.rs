//! Real-time scheduler on a tokio runtime.

use super::{CycleId, PlaybackTick, ScheduledTick, Scheduler};
use crate::driver::Command;
use std::collections::HashMap;
use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Scheduler that spawns one tokio task per playback cycle.
///
/// The task sleeps until each tick's deadline and sends it as
/// [`Command::Tick`] into the driver's command channel. Cancelling a cycle
/// aborts its task. A tick already queued in the channel when the cycle is
/// cancelled is dropped by the controller as stale.
///
/// Only a weak sender is kept, so the channel closes once every
/// [`GameHandle`](crate::driver::GameHandle) is gone.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    commands: WeakUnboundedSender<Command>,
    cycles: HashMap<CycleId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(commands: &UnboundedSender<Command>) -> Self {
        Self {
            commands: commands.downgrade(),
            cycles: HashMap::new(),
        }
    }

    /// Cycles whose task has not finished yet.
    pub fn active_cycles(&self) -> usize {
        self.cycles.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_cycle(&mut self, cycle: CycleId, plan: Vec<ScheduledTick>) {
        self.cycles.retain(|_, task| !task.is_finished());

        let commands = self.commands.clone();
        let started = Instant::now();
        let task = tokio::spawn(async move {
            for step in plan {
                sleep_until(started + step.offset).await;
                let tick = PlaybackTick {
                    cycle,
                    kind: step.kind,
                };
                let delivered = commands
                    .upgrade()
                    .is_some_and(|sender| sender.send(Command::Tick(tick)).is_ok());
                if !delivered {
                    debug!(%cycle, "driver gone, stopping playback task");
                    break;
                }
            }
        });

        self.cycles.insert(cycle, task);
    }

    fn cancel_cycle(&mut self, cycle: CycleId) {
        if let Some(task) = self.cycles.remove(&cycle) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.cycles.values() {
            task.abort();
        }
    }
}
