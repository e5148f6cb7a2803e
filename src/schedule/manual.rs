//! Virtual-time scheduler.

use super::{CycleId, PlaybackTick, ScheduledTick, Scheduler};
use std::time::Duration;

#[derive(Clone, Debug)]
struct Pending {
    due: Duration,
    order: u64,
    tick: PlaybackTick,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Nothing fires on its own: the owner advances time and pulls due ticks with
/// [`ManualScheduler::pop_due`]. Ticks due at the same instant come out in the
/// order they were scheduled.
///
/// # Example
///
/// ```rust
/// use simon::schedule::{CycleId, ManualScheduler, ScheduledTick, Scheduler, TickKind};
/// use std::time::Duration;
///
/// let mut scheduler = ManualScheduler::new();
/// let cycle = CycleId::first();
/// scheduler.schedule_cycle(
///     cycle,
///     vec![ScheduledTick { offset: Duration::from_millis(10), kind: TickKind::Highlight { step: 0 } }],
/// );
///
/// assert!(scheduler.pop_due(Duration::from_millis(5)).is_none());
/// let tick = scheduler.pop_due(Duration::from_millis(10)).unwrap();
/// assert_eq!(tick.cycle, cycle);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_order: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of ticks not yet delivered.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Cycles with at least one undelivered tick, ascending.
    pub fn active_cycles(&self) -> Vec<CycleId> {
        let mut cycles: Vec<CycleId> = self.pending.iter().map(|p| p.tick.cycle).collect();
        cycles.sort();
        cycles.dedup();
        cycles
    }

    /// Remove and return the earliest tick due at or before `until`, moving
    /// the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<PlaybackTick> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.order))
            .map(|(index, _)| index)?;

        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.tick)
    }

    /// Move the clock forward to `until`. Never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_cycle(&mut self, cycle: CycleId, plan: Vec<ScheduledTick>) {
        for step in plan {
            self.pending.push(Pending {
                due: self.now + step.offset,
                order: self.next_order,
                tick: PlaybackTick {
                    cycle,
                    kind: step.kind,
                },
            });
            self.next_order += 1;
        }
    }

    fn cancel_cycle(&mut self, cycle: CycleId) {
        self.pending.retain(|p| p.tick.cycle != cycle);
    }
}
