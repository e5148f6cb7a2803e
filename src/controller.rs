//! Game controller.
//!
//! The controller is the imperative shell around the pure core: it owns the
//! current [`GameState`], turns outcomes into surface calls and keeps exactly
//! one playback cycle alive at a time.

use crate::config::GameConfig;
use crate::core::{generate_sequence, GameState, Outcome, Phase, PlaybackSpeed, SignalId};
use crate::schedule::{playback_plan, CycleId, ManualScheduler, PlaybackTick, Scheduler, TickKind};
use crate::surface::{RoundLabel, Surface};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Drives a game on a presentation surface.
///
/// Inputs arrive through [`start`](Self::start),
/// [`on_signal_activated`](Self::on_signal_activated) and
/// [`on_tick`](Self::on_tick). Each call runs to completion before the next,
/// so no locking is involved.
pub struct GameController<Sf, Sc, R = StdRng> {
    config: GameConfig,
    surface: Sf,
    scheduler: Sc,
    rng: R,
    game: Option<GameState>,
    last_cycle: Option<CycleId>,
    active_cycle: Option<CycleId>,
    lit: Option<SignalId>,
}

impl<Sf: Surface, Sc: Scheduler, R: Rng> GameController<Sf, Sc, R> {
    /// Assemble a controller from already-built parts.
    ///
    /// The configuration is taken as given; use
    /// [`ControllerBuilder`](crate::builder::ControllerBuilder) to have it
    /// validated.
    pub fn from_parts(surface: Sf, scheduler: Sc, rng: R, config: GameConfig) -> Self {
        Self {
            config,
            surface,
            scheduler,
            rng,
            game: None,
            last_cycle: None,
            active_cycle: None,
            lit: None,
        }
    }

    /// Start a new game, discarding whatever was in progress.
    pub fn start(&mut self) {
        self.halt();

        let sequence = generate_sequence(&mut self.rng, self.config.total_rounds);
        let game = GameState::new(
            sequence,
            PlaybackSpeed::from_millis(self.config.initial_speed_ms),
        );
        info!(game_id = %game.game_id, rounds = game.total_rounds, "game started");
        self.game = Some(game);

        self.surface.set_start_enabled(false);
        self.surface.clear_winners();
        self.surface.set_round_label(RoundLabel::Round(0));
        self.begin_playback();
    }

    /// The player activated control `id`.
    pub fn on_signal_activated(&mut self, id: SignalId) {
        let Some(game) = self.game.as_mut() else {
            debug!(signal = %id, "activation before any game, ignored");
            return;
        };

        let outcome = game.evaluate(id);
        game.apply(outcome, &self.config);
        let (game_id, round) = (game.game_id, game.current_round);

        match outcome {
            Outcome::Ignored => {
                debug!(%game_id, signal = %id, phase = %game.phase, "activation ignored");
            }
            Outcome::Matched => {
                trace!(%game_id, signal = %id, position = game.user_position, "signal matched");
            }
            Outcome::RoundCleared => {
                debug!(%game_id, round, speed_ms = game.speed.as_millis(), "round cleared");
                self.surface.set_round_label(RoundLabel::Round(round));
                self.begin_playback();
            }
            Outcome::Won => {
                info!(%game_id, rounds = round, "game won");
                self.surface.set_round_label(RoundLabel::Trophy);
                self.surface.mark_winners();
            }
            Outcome::Lost => {
                info!(%game_id, round, signal = %id, "game lost");
                self.surface.set_start_enabled(false);
                self.surface.show_lost_banner();
            }
        }
    }

    /// Deliver a scheduled playback tick. Ticks from a cycle that is no
    /// longer active are dropped.
    pub fn on_tick(&mut self, tick: PlaybackTick) {
        if self.active_cycle != Some(tick.cycle) {
            debug!(cycle = %tick.cycle, "stale playback tick dropped");
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let step = match tick.kind {
            TickKind::Highlight { step } | TickKind::Clear { step } => step,
        };
        let Some(id) = game.sequence.get(step) else {
            warn!(cycle = %tick.cycle, step, "playback step beyond sequence");
            return;
        };

        match tick.kind {
            TickKind::Highlight { .. } => {
                debug!(cycle = %tick.cycle, step, signal = %id, "highlight");
                self.surface.highlight_signal(id);
                self.lit = Some(id);
            }
            TickKind::Clear { .. } => {
                self.surface.clear_highlight(id);
                self.lit = None;
                if step >= game.current_round {
                    game.transition_to(Phase::AwaitingInput);
                    self.active_cycle = None;
                    debug!(cycle = %tick.cycle, round = game.current_round, "awaiting input");
                }
            }
        }
    }

    /// Cancel the active playback cycle, turning off a signal it left lit.
    pub fn halt(&mut self) {
        if let Some(cycle) = self.active_cycle.take() {
            debug!(%cycle, "playback cancelled");
            self.scheduler.cancel_cycle(cycle);
        }
        if let Some(id) = self.lit.take() {
            self.surface.clear_highlight(id);
        }
    }

    fn begin_playback(&mut self) {
        self.halt();
        let Some(game) = self.game.as_ref() else {
            return;
        };

        let cycle = self.last_cycle.map_or_else(CycleId::first, CycleId::next);
        let plan = playback_plan(game.current_round, game.speed);
        debug!(%cycle, round = game.current_round, steps = game.current_round + 1, "playback scheduled");

        self.scheduler.schedule_cycle(cycle, plan);
        self.last_cycle = Some(cycle);
        self.active_cycle = Some(cycle);
    }
}

impl<Sf, Sc, R> GameController<Sf, Sc, R> {
    /// Current phase; `Idle` before the first start.
    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::Idle, |game| game.phase)
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playback cycle currently allowed to drive the surface.
    pub fn active_cycle(&self) -> Option<CycleId> {
        self.active_cycle
    }

    pub fn surface(&self) -> &Sf {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Sf {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &Sc {
        &self.scheduler
    }
}

impl<Sf: Surface, R: Rng> GameController<Sf, ManualScheduler, R> {
    /// Move virtual time forward by `by`, delivering every tick that falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(tick) = self.scheduler.pop_due(until) {
            self.on_tick(tick);
        }
        self.scheduler.advance_to(until);
    }
}
