//! Domain layer: pure round rules, no I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod lookahead;
pub mod meld;
pub mod passing;
pub mod round_flow;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod simulate;
pub mod state;
#[cfg(test)]
mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_exchange;
#[cfg(test)]
mod tests_props_lookahead;
#[cfg(test)]
mod tests_props_meld;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_round_flow;

// Re-exports for ergonomics
pub use bidding::{BidOutcome, BidState, Contract};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, DISTINCT_CARDS};
pub use dealing::deal_hands;
pub use meld::{MeldPattern, MeldTable};
pub use scoring::{BidRewardPolicy, RoundResult};
pub use seed_derivation::{derive_dealing_seed, derive_lookahead_seed, derive_strategy_seed};
pub use state::{Partnership, Phase, RoundState, Seat};
