//! MCTS-based player
//!
//! Runs a fresh UCT search for every decision. Arguments read on top of the
//! configured search settings:
//! - `T`: simulations per move
//! - `c`: selection exploration constant
//! - `decision_c`: exploration constant for the final pick
//! - `seed`: seed for the player's RNG

use engine_core::{Action, Side};
use games_nogo::Board;
use mcts::{run_mcts, MctsConfig};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::agent::{Agent, AgentArgs, AgentError};

/// MCTS-based player.
#[derive(Debug)]
pub struct MctsPlayer {
    args: AgentArgs,
    side: Side,
    config: MctsConfig,
    /// Threaded through every search this player runs
    rng: ChaCha20Rng,
}

impl MctsPlayer {
    pub fn new(args: &str, base: MctsConfig) -> Result<Self, AgentError> {
        let args = AgentArgs::with_defaults("name=mcts", args);
        let side = args.validate()?;

        let mut config = base;
        if let Some(sims) = args.numeric::<u32>("T")? {
            config = config.with_simulations(sims);
        }
        if let Some(c) = args.numeric::<f64>("c")? {
            config = config.with_exploration(c);
        }
        if let Some(c) = args.numeric::<f64>("decision_c")? {
            config = config.with_decision_exploration(c);
        }
        if let Some(seed) = args.numeric::<u64>("seed")? {
            config = config.with_seed(seed);
        }

        debug!(
            name = args.name(),
            side = %side,
            simulations = config.num_simulations,
            exploration = config.exploration,
            seed = ?config.seed,
            "MCTS player created"
        );

        let rng = config.rng();
        Ok(Self {
            args,
            side,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Agent for MctsPlayer {
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
        let result = run_mcts(board, self.config.clone(), &mut self.rng)?;
        Ok(result.action)
    }
}
