//! Presentation surface.
//!
//! The game never draws anything itself. Whatever shows the controls to the
//! player (a web page, a terminal, a test recorder) implements [`Surface`]
//! and is handed to the controller.

use crate::core::SignalId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content of the round indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundLabel {
    Round(usize),
    Trophy,
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Round(n) => write!(f, "Round {n}"),
            Self::Trophy => f.write_str("🏆"),
        }
    }
}

/// Everything the game asks of its presentation.
///
/// The start control is only ever disabled by the game: on start and on loss.
/// It is never re-enabled after [`Phase::Won`](crate::core::Phase::Won) or
/// [`Phase::Lost`](crate::core::Phase::Lost); the host decides when to offer a
/// new game again. The controller honours `start()` regardless of the
/// control's state.
pub trait Surface {
    /// Light up a control.
    fn highlight_signal(&mut self, id: SignalId);

    /// Turn a lit control back off.
    fn clear_highlight(&mut self, id: SignalId);

    fn set_round_label(&mut self, label: RoundLabel);

    /// Enable or disable the start control. The game only ever passes
    /// `false`; re-enabling is up to the host.
    fn set_start_enabled(&mut self, enabled: bool);

    /// Replace the round indicator with the loss message.
    fn show_lost_banner(&mut self);

    /// Mark every control as winning.
    fn mark_winners(&mut self);

    /// Remove winning marks left by a previous game.
    fn clear_winners(&mut self) {}
}

/// A single call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    Highlight(SignalId),
    ClearHighlight(SignalId),
    RoundLabel(RoundLabel),
    StartEnabled(bool),
    LostBanner,
    MarkWinners,
    ClearWinners,
}

/// Surface that keeps every call it receives, in order.
///
/// Useful for headless hosts and for asserting what a player would have seen.
///
/// # Example
///
/// ```rust
/// use simon::surface::{RecordingSurface, RoundLabel, Surface, SurfaceEvent};
///
/// let mut surface = RecordingSurface::default();
/// surface.set_round_label(RoundLabel::Round(3));
///
/// assert_eq!(surface.round_label(), Some(RoundLabel::Round(3)));
/// assert_eq!(surface.events(), &[SurfaceEvent::RoundLabel(RoundLabel::Round(3))]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Drain recorded events.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Signals highlighted so far, in order.
    pub fn highlights(&self) -> Vec<SignalId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Highlight(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Most recent round label, if any was set.
    pub fn round_label(&self) -> Option<RoundLabel> {
        self.events.iter().rev().find_map(|event| match event {
            SurfaceEvent::RoundLabel(label) => Some(*label),
            _ => None,
        })
    }

    /// Most recent start-control state, if any was set.
    pub fn start_enabled(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|event| match event {
            SurfaceEvent::StartEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Signals highlighted and not yet cleared.
    pub fn lit(&self) -> Vec<SignalId> {
        let mut lit = Vec::new();
        for event in &self.events {
            match event {
                SurfaceEvent::Highlight(id) => lit.push(*id),
                SurfaceEvent::ClearHighlight(id) => {
                    if let Some(pos) = lit.iter().position(|l| l == id) {
                        lit.remove(pos);
                    }
                }
                _ => {}
            }
        }
        lit
    }

    pub fn lost_banner_shown(&self) -> bool {
        self.events.contains(&SurfaceEvent::LostBanner)
    }
}

impl Surface for RecordingSurface {
    fn highlight_signal(&mut self, id: SignalId) {
        self.events.push(SurfaceEvent::Highlight(id));
    }

    fn clear_highlight(&mut self, id: SignalId) {
        self.events.push(SurfaceEvent::ClearHighlight(id));
    }

    fn set_round_label(&mut self, label: RoundLabel) {
        self.events.push(SurfaceEvent::RoundLabel(label));
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.events.push(SurfaceEvent::StartEnabled(enabled));
    }

    fn show_lost_banner(&mut self) {
        self.events.push(SurfaceEvent::LostBanner);
    }

    fn mark_winners(&mut self) {
        self.events.push(SurfaceEvent::MarkWinners);
    }

    fn clear_winners(&mut self) {
        self.events.push(SurfaceEvent::ClearWinners);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(index: u8) -> SignalId {
        SignalId::new(index).unwrap()
    }

    #[test]
    fn round_label_renders_text_or_trophy() {
        assert_eq!(RoundLabel::Round(0).to_string(), "Round 0");
        assert_eq!(RoundLabel::Round(7).to_string(), "Round 7");
        assert_eq!(RoundLabel::Trophy.to_string(), "🏆");
    }

    #[test]
    fn recording_keeps_call_order() {
        let mut surface = RecordingSurface::default();
        surface.set_start_enabled(false);
        surface.highlight_signal(signal(1));
        surface.clear_highlight(signal(1));
        surface.show_lost_banner();

        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::StartEnabled(false),
                SurfaceEvent::Highlight(signal(1)),
                SurfaceEvent::ClearHighlight(signal(1)),
                SurfaceEvent::LostBanner,
            ]
        );
        assert!(surface.lost_banner_shown());
        assert_eq!(surface.start_enabled(), Some(false));
    }

    #[test]
    fn lit_tracks_unmatched_highlights() {
        let mut surface = RecordingSurface::default();
        surface.highlight_signal(signal(2));
        surface.highlight_signal(signal(3));
        surface.clear_highlight(signal(2));

        assert_eq!(surface.lit(), vec![signal(3)]);
        assert_eq!(surface.highlights(), vec![signal(2), signal(3)]);
    }

    #[test]
    fn take_events_drains() {
        let mut surface = RecordingSurface::default();
        surface.mark_winners();
        assert_eq!(surface.take_events(), vec![SurfaceEvent::MarkWinners]);
        assert!(surface.events().is_empty());
        assert_eq!(surface.round_label(), None);
    }
}
