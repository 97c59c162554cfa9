//! MCTS configuration parameters.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of iterations to run per decision.
    pub num_simulations: u32,

    /// Exploration constant used while descending the tree.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,

    /// Exploration constant used once, to pick the move among the root's
    /// children after the budget is spent. Near zero means "best win rate".
    pub decision_exploration: f64,

    /// Seed for the search RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            exploration: std::f64::consts::SQRT_2,
            decision_exploration: 1e-12,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast, seeded config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_simulations: 50,
            seed: Some(42),
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set the selection exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the final-decision exploration constant.
    pub fn with_decision_exploration(mut self, c: f64) -> Self {
        self.decision_exploration = c;
        self
    }

    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the search RNG described by `seed`.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.num_simulations, 1000);
        assert!((config.exploration - 2f64.sqrt()).abs() < 1e-12);
        assert!((config.decision_exploration - 1e-12).abs() < 1e-20);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_simulations(100)
            .with_exploration(0.5)
            .with_decision_exploration(0.0)
            .with_seed(7);

        assert_eq!(config.num_simulations, 100);
        assert!((config.exploration - 0.5).abs() < 1e-12);
        assert_eq!(config.decision_exploration, 0.0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = MctsConfig::for_testing();
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
