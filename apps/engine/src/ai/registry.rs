//! Strategy registry.
//!
//! Strategies are looked up by a stable name ("random", "heuristic").
//! Same seed gives the same behaviour.

use crate::ai::{Heuristic, RandomPlayer, Strategy};

/// Construction options shared by every factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyOptions {
    pub seed: Option<u64>,
    pub bid_threshold: u32,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            seed: None,
            bid_threshold: crate::ai::heuristic::DEFAULT_BID_THRESHOLD,
        }
    }
}

/// Factory definition for constructing strategies.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(&StrategyOptions) -> Box<dyn Strategy>,
}

static FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    StrategyFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    FACTORIES
}

/// Finds a registered factory by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name.trim()))
}

fn make_random_player(options: &StrategyOptions) -> Box<dyn Strategy> {
    Box::new(RandomPlayer::new(options.seed))
}

fn make_heuristic(options: &StrategyOptions) -> Box<dyn Strategy> {
    Box::new(Heuristic::with_threshold(options.seed, options.bid_threshold))
}
