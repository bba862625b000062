//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Uniform random actions
    Random,
    /// The heuristic seat strategy playing the agent's seat
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Play full rounds through the environment
    Rounds,
    /// Deal only and record raw meld scores
    Meld,
}
