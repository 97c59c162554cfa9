//! Random player for either side.

use engine_core::{Action, Place, Position, Side};
use games_nogo::Board;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

use crate::agent::{Agent, AgentArgs, AgentError};

/// Plays a uniformly random legal placement.
///
/// Reads `seed` from its arguments; without one the RNG is seeded from
/// entropy.
#[derive(Debug)]
pub struct RandomPlayer {
    args: AgentArgs,
    side: Side,
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new(args: &str) -> Result<Self, AgentError> {
        let args = AgentArgs::with_defaults("name=random", args);
        let side = args.validate()?;
        let rng = match args.numeric::<u64>("seed")? {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        Ok(Self { args, side, rng })
    }
}

impl Agent for RandomPlayer {
    fn args(&self) -> &AgentArgs {
        &self.args
    }

    fn args_mut(&mut self) -> &mut AgentArgs {
        &mut self.args
    }

    fn role(&self) -> Side {
        self.side
    }

    fn take_action(&mut self, board: &Board) -> Result<Action, AgentError> {
        let mut cells: Vec<u16> = (0..board.num_cells() as u16).collect();
        cells.shuffle(&mut self.rng);

        let action = cells
            .into_iter()
            .map(|cell| Place::new(cell, self.side))
            .find(|place| board.is_legal(*place))
            .map(Action::Place)
            .unwrap_or(Action::NoMove);

        Ok(action)
    }
}
