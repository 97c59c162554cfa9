//! Agent arguments and the agent interface.
//!
//! Agents are configured with whitespace-separated `key=value` pairs, e.g.
//! `"name=mcts role=black T=2000 seed=7"`. Pairs are laid over the defaults
//! `name=unknown role=unknown`, and later pairs override earlier ones.

use std::collections::BTreeMap;
use std::str::FromStr;

use engine_core::{Action, Side};
use games_nogo::Board;
use mcts::{MctsConfig, SearchError};
use thiserror::Error;

use crate::mcts_policy::MctsPlayer;
use crate::policy::RandomPlayer;

/// Defaults every agent starts from.
const BASE_ARGS: &str = "name=unknown role=unknown";

/// Characters that would break the match log format.
const INVALID_NAME_CHARS: &[char] = &['[', ']', '(', ')', ':', ';', ' '];

/// Errors raised while configuring or running an agent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Key/value properties of an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentArgs {
    meta: BTreeMap<String, String>,
}

impl AgentArgs {
    /// Parse `args` on top of the base defaults.
    pub fn parse(args: &str) -> Self {
        Self::with_defaults("", args)
    }

    /// Parse `args` on top of `defaults`, which sit on top of the base defaults.
    pub fn with_defaults(defaults: &str, args: &str) -> Self {
        let mut parsed = Self {
            meta: BTreeMap::new(),
        };
        for text in [BASE_ARGS, defaults, args] {
            for pair in text.split_whitespace() {
                parsed.notify(pair);
            }
        }
        parsed
    }

    /// Set one property from a `key=value` message. A bare `key` is stored
    /// with an empty value.
    pub fn notify(&mut self, msg: &str) {
        let (key, value) = msg.split_once('=').unwrap_or((msg, ""));
        self.meta.insert(key.to_string(), value.to_string());
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.meta.contains_key(key)
    }

    /// Parse a property on demand. Absent keys give `Ok(None)`.
    pub fn numeric<T: FromStr>(&self, key: &str) -> Result<Option<T>, AgentError> {
        self.property(key)
            .map(|value| {
                value.parse::<T>().map_err(|_| AgentError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    pub fn name(&self) -> &str {
        self.property("name").unwrap_or("unknown")
    }

    pub fn role(&self) -> &str {
        self.property("role").unwrap_or("unknown")
    }

    /// Check the name and resolve the role to a side.
    pub fn validate(&self) -> Result<Side, AgentError> {
        let name = self.name();
        if name.contains(INVALID_NAME_CHARS) {
            return Err(AgentError::InvalidName(name.to_string()));
        }

        self.role()
            .parse::<Side>()
            .map_err(|_| AgentError::InvalidRole(self.role().to_string()))
    }
}

/// A player that can be seated in the arena.
pub trait Agent {
    fn args(&self) -> &AgentArgs;

    fn args_mut(&mut self) -> &mut AgentArgs;

    /// Side this agent plays, fixed at construction.
    fn role(&self) -> Side;

    fn name(&self) -> &str {
        self.args().name()
    }

    fn notify(&mut self, msg: &str) {
        self.args_mut().notify(msg);
    }

    fn open_episode(&mut self, _flag: &str) {}

    fn close_episode(&mut self, _flag: &str) {}

    /// Choose a placement for the side to move, or `Action::NoMove`.
    fn take_action(&mut self, board: &Board) -> Result<Action, AgentError>;
}

/// Build an agent from its argument string.
///
/// The MCTS player is chosen when the name is `mcts` or a bare `mcts` flag is
/// present; any other name gets the random player. `base` supplies the search
/// settings the arguments do not override.
pub fn build_agent(args: &str, base: &MctsConfig) -> Result<Box<dyn Agent>, AgentError> {
    let parsed = AgentArgs::parse(args);
    if parsed.name() == "mcts" || parsed.contains("mcts") {
        Ok(Box::new(MctsPlayer::new(args, base.clone())?))
    } else {
        Ok(Box::new(RandomPlayer::new(args)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = AgentArgs::parse("");
        assert_eq!(args.name(), "unknown");
        assert_eq!(args.role(), "unknown");
    }

    #[test]
    fn test_later_pairs_override() {
        let args = AgentArgs::with_defaults("name=random", "name=first name=second role=white");
        assert_eq!(args.name(), "second");
        assert_eq!(args.role(), "white");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let args = AgentArgs::parse("note=a=b");
        assert_eq!(args.property("note"), Some("a=b"));
    }

    #[test]
    fn test_bare_flag() {
        let args = AgentArgs::parse("mcts role=black");
        assert!(args.contains("mcts"));
        assert_eq!(args.property("mcts"), Some(""));
        assert!(!args.contains("T"));
    }

    #[test]
    fn test_notify_updates_property() {
        let mut args = AgentArgs::parse("T=10");
        args.notify("T=20");
        args.notify("extra=1");

        assert_eq!(args.numeric::<u32>("T"), Ok(Some(20)));
        assert_eq!(args.property("extra"), Some("1"));
    }

    #[test]
    fn test_numeric() {
        let args = AgentArgs::parse("T=500 c=0.5 bad=abc");

        assert_eq!(args.numeric::<u32>("T"), Ok(Some(500)));
        assert_eq!(args.numeric::<f64>("c"), Ok(Some(0.5)));
        assert_eq!(args.numeric::<u64>("seed"), Ok(None));
        assert_eq!(
            args.numeric::<u32>("bad"),
            Err(AgentError::InvalidValue {
                key: "bad".into(),
                value: "abc".into()
            })
        );
    }

    #[test]
    fn test_validate_role() {
        assert_eq!(AgentArgs::parse("role=black").validate(), Ok(Side::Black));
        assert_eq!(AgentArgs::parse("role=white").validate(), Ok(Side::White));
        assert_eq!(
            AgentArgs::parse("").validate(),
            Err(AgentError::InvalidRole("unknown".into()))
        );
        assert_eq!(
            AgentArgs::parse("role=red").validate(),
            Err(AgentError::InvalidRole("red".into()))
        );
    }

    #[test]
    fn test_validate_name() {
        for bad in ["a[1]", "f(x)", "x:y", "x;y"] {
            let args = AgentArgs::parse(&format!("name={} role=black", bad));
            assert_eq!(args.validate(), Err(AgentError::InvalidName(bad.into())));
        }

        let mut args = AgentArgs::parse("role=black");
        args.notify("name=two words");
        assert!(matches!(args.validate(), Err(AgentError::InvalidName(_))));
    }

    #[test]
    fn test_build_agent_dispatch() {
        let base = MctsConfig::for_testing();

        let mcts = build_agent("name=mcts role=black", &base).unwrap();
        assert_eq!(mcts.name(), "mcts");
        assert_eq!(mcts.role(), Side::Black);

        let flagged = build_agent("name=alpha mcts role=white", &base).unwrap();
        assert_eq!(flagged.name(), "alpha");

        let random = build_agent("role=white", &base).unwrap();
        assert_eq!(random.name(), "random");
        assert_eq!(random.role(), Side::White);

        assert!(matches!(
            build_agent("name=mcts", &base),
            Err(AgentError::InvalidRole(_))
        ));
    }
}
