//! Match runner seating a black and a white agent on a NoGo board.

use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use engine_core::{Action, Position, Side};
use games_nogo::Board;
use tracing::{debug, info, warn};

use crate::agent::Agent;
use crate::stats::{ArenaStats, GameRecord};

/// Plays games between two agents and tallies the results.
pub struct Arena {
    width: usize,
    height: usize,
    black: Box<dyn Agent>,
    white: Box<dyn Agent>,
    stats: ArenaStats,
}

impl Arena {
    /// Seat two agents. Each agent's role must match its seat, and the board
    /// size must be valid.
    pub fn new(
        width: usize,
        height: usize,
        black: Box<dyn Agent>,
        white: Box<dyn Agent>,
    ) -> Result<Self> {
        Board::with_size(width, height)?;

        for (seat, agent) in [(Side::Black, &black), (Side::White, &white)] {
            if agent.role() != seat {
                return Err(anyhow!(
                    "agent '{}' plays {} but was seated as {}",
                    agent.name(),
                    agent.role(),
                    seat
                ));
            }
        }

        Ok(Self {
            width,
            height,
            black,
            white,
            stats: ArenaStats::new(),
        })
    }

    pub fn stats(&self) -> &ArenaStats {
        &self.stats
    }

    /// Play `games` games, logging each result.
    pub fn run(&mut self, games: u32) -> Result<&ArenaStats> {
        info!(
            games,
            width = self.width,
            height = self.height,
            black = self.black.name(),
            white = self.white.name(),
            "Starting arena"
        );

        for index in 0..games {
            let record = self
                .play_game()
                .with_context(|| format!("game {} failed", index + 1))?;

            info!(
                game = index + 1,
                winner = %record.winner,
                plies = record.plies,
                forfeit = record.forfeit,
                "Game finished"
            );
        }

        Ok(&self.stats)
    }

    /// Play one game until the side to move is stuck or forfeits.
    pub fn play_game(&mut self) -> Result<GameRecord> {
        let mut board = Board::with_size(self.width, self.height)?;
        let mut plies = 0;

        self.black.open_episode("black");
        self.white.open_episode("white");

        let record = loop {
            let side = board.side_to_move();
            let agent = match side {
                Side::Black => &mut self.black,
                Side::White => &mut self.white,
            };

            let start = Instant::now();
            let action = agent.take_action(&board)?;
            self.stats.record_decision(start.elapsed());

            let place = match action {
                Action::Place(place) => place,
                Action::NoMove => {
                    // Giving up with moves left still loses, but is noted
                    let forfeit = board.has_legal_move();
                    if forfeit {
                        warn!(agent = agent.name(), %side, plies, "Agent passed with legal moves left");
                    }
                    break GameRecord {
                        winner: side.opponent(),
                        plies,
                        forfeit,
                    };
                }
            };

            if !board.apply(place).is_legal() {
                warn!(agent = agent.name(), %side, %place, plies, "Illegal action, forfeiting");
                break GameRecord {
                    winner: side.opponent(),
                    plies,
                    forfeit: true,
                };
            }

            plies += 1;
            debug!(%place, plies, "Placement applied");
        };

        debug!("Final position:\n{}", board);

        self.black.close_episode("black");
        self.white.close_episode("white");
        self.stats.record_game(&record);

        Ok(record)
    }
}
