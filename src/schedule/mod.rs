//! Playback scheduling.
//!
//! Playback of a round is a *cycle*: a fixed plan of highlight and clear
//! ticks at offsets from the moment the cycle is scheduled. Each cycle gets a
//! fresh [`CycleId`]. The controller cancels the previous cycle before it
//! schedules the next one and drops any tick whose cycle is no longer active,
//! so two playbacks never drive the surface at the same time.
//!
//! Two schedulers are provided:
//! - [`ManualScheduler`]: virtual time, advanced explicitly (tests, headless hosts)
//! - [`TokioScheduler`]: real time on a tokio runtime, feeding a [`GameDriver`](crate::driver::GameDriver)

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use crate::core::PlaybackSpeed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Generation token of a playback cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CycleId(u64);

impl CycleId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle#{}", self.0)
    }
}

/// What a playback tick does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// Light the signal at `step` of the sequence.
    Highlight { step: usize },
    /// Turn it off again; clearing the last step ends playback.
    Clear { step: usize },
}

/// A tick of the plan, relative to the start of its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTick {
    pub offset: Duration,
    pub kind: TickKind,
}

/// A tick delivered back to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackTick {
    pub cycle: CycleId,
    pub kind: TickKind,
}

/// Deferred delivery of playback ticks.
///
/// Implementations hand every tick of a scheduled cycle back to
/// [`GameController::on_tick`](crate::controller::GameController::on_tick) in
/// offset order, and stop delivering a cycle once it is cancelled.
pub trait Scheduler {
    fn schedule_cycle(&mut self, cycle: CycleId, plan: Vec<ScheduledTick>);

    fn cancel_cycle(&mut self, cycle: CycleId);
}

/// Plan for playing back `round`: `round + 1` steps, each highlighted at
/// `speed * (step + 1)` and cleared half an interval later.
///
/// # Example
///
/// ```rust
/// use simon::core::PlaybackSpeed;
/// use simon::schedule::{playback_plan, TickKind};
/// use std::time::Duration;
///
/// let plan = playback_plan(1, PlaybackSpeed::from_millis(1000.0));
/// let offsets: Vec<_> = plan.iter().map(|t| t.offset.as_millis()).collect();
///
/// assert_eq!(offsets, vec![1000, 1500, 2000, 2500]);
/// assert_eq!(plan[3].kind, TickKind::Clear { step: 1 });
/// ```
pub fn playback_plan(round: usize, speed: PlaybackSpeed) -> Vec<ScheduledTick> {
    let interval = speed.interval();
    let pulse = speed.pulse();

    (0..=round)
        .flat_map(|step| {
            let lit_at = interval * (step as u32 + 1);
            [
                ScheduledTick {
                    offset: lit_at,
                    kind: TickKind::Highlight { step },
                },
                ScheduledTick {
                    offset: lit_at + pulse,
                    kind: TickKind::Clear { step },
                },
            ]
        })
        .collect()
}
