//! Seat strategies: the automated players filling seats the agent does not
//! control.
//!
//! - `Strategy` trait plus the views it decides from
//! - `RandomPlayer`: uniform legal moves (seedable)
//! - `Heuristic`: meld-threshold bidding and greedy play
//! - registry lookup by name and role-based assignment

pub mod heuristic;
mod random;
pub mod registry;
pub mod roles;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_strategies, StrategyFactory, StrategyOptions};
pub use roles::{RoleNames, RoleStrategies, SeatRole};
pub use trait_def::{AiError, BidView, PassView, PlayView, Strategy};
