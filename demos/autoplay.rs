//! Autoplay
//!
//! This demo runs a full game on the tokio driver with a surface that logs
//! through `tracing`, and an automatic player that echoes every round.
//!
//! Key concepts:
//! - Real-time playback scheduled on tokio
//! - Player input and playback ticks serialised through one channel
//! - Presentation injected as a `Surface`
//!
//! Run with: cargo run --example autoplay
//! More detail: RUST_LOG=simon=debug cargo run --example autoplay

use simon::config::GameConfig;
use simon::core::Phase;
use simon::driver::GameDriver;
use simon::surface::{RoundLabel, Surface};
use simon::SignalId;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const COLORS: [&str; 4] = ["green", "red", "yellow", "blue"];

struct LogSurface;

impl Surface for LogSurface {
    fn highlight_signal(&mut self, id: SignalId) {
        info!(color = COLORS[id.index()], "● lit");
    }

    fn clear_highlight(&mut self, id: SignalId) {
        info!(color = COLORS[id.index()], "○ off");
    }

    fn set_round_label(&mut self, label: RoundLabel) {
        info!("{label}");
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        info!(enabled, "start button");
    }

    fn show_lost_banner(&mut self) {
        info!("LOST");
    }

    fn mark_winners(&mut self) {
        info!("every control flashes as a winner");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (driver, handle) = GameDriver::new(LogSurface, GameConfig::default(), None)?;
    let game_task = tokio::spawn(driver.run());

    handle.start()?;

    loop {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let Some(game) = handle.snapshot().await? else {
            continue;
        };
        if game.phase.is_final() {
            info!(phase = %game.phase, rounds = game.current_round, "game over");
            break;
        }
        if game.phase == Phase::AwaitingInput {
            if let Some(id) = game.expected_signal() {
                info!(color = COLORS[id.index()], "player presses");
                handle.activate(id)?;
            }
        }
    }

    handle.shutdown()?;
    game_task.await?;
    Ok(())
}
