//! Arena statistics tracking.
//!
//! This module tracks match results across games:
//! - Wins per side and per agent seat
//! - Forfeits caused by illegal actions
//! - Game lengths and decision timing

use std::time::{Duration, Instant};

use engine_core::Side;
use tracing::info;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Side,
    /// Placements played before the game ended
    pub plies: u32,
    /// The loser made an illegal action or gave up with moves left
    pub forfeit: bool,
}

/// Aggregated arena statistics.
#[derive(Debug)]
pub struct ArenaStats {
    games: u32,
    black_wins: u32,
    white_wins: u32,
    forfeits: u32,
    total_plies: u64,
    decisions: u64,
    decision_time: Duration,
    start_time: Instant,
}

impl Default for ArenaStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaStats {
    pub fn new() -> Self {
        Self {
            games: 0,
            black_wins: 0,
            white_wins: 0,
            forfeits: 0,
            total_plies: 0,
            decisions: 0,
            decision_time: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Record a completed game.
    pub fn record_game(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_plies += record.plies as u64;
        match record.winner {
            Side::Black => self.black_wins += 1,
            Side::White => self.white_wins += 1,
        }
        if record.forfeit {
            self.forfeits += 1;
        }
    }

    /// Record the time one agent took to pick an action.
    pub fn record_decision(&mut self, elapsed: Duration) {
        self.decisions += 1;
        self.decision_time += elapsed;
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black_wins,
            Side::White => self.white_wins,
        }
    }

    pub fn forfeits(&self) -> u32 {
        self.forfeits
    }

    pub fn win_rate(&self, side: Side) -> f64 {
        if self.games > 0 {
            self.wins(side) as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn avg_plies(&self) -> f64 {
        if self.games > 0 {
            self.total_plies as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn avg_decision_us(&self) -> f64 {
        if self.decisions > 0 {
            self.decision_time.as_micros() as f64 / self.decisions as f64
        } else {
            0.0
        }
    }

    /// Log a summary line for the whole run.
    pub fn log_summary(&self) {
        info!(
            games = self.games,
            black_wins = self.black_wins,
            white_wins = self.white_wins,
            forfeits = self.forfeits,
            black_win_rate = format!("{:.3}", self.win_rate(Side::Black)),
            avg_plies = format!("{:.1}", self.avg_plies()),
            avg_decision_us = format!("{:.0}", self.avg_decision_us()),
            runtime_secs = format!("{:.2}", self.start_time.elapsed().as_secs_f64()),
            "Arena finished"
        );
    }
}
