//! Four-seat partnership pinochle round engine.
//!
//! - `domain`: dealing, meld, bidding, exchange, trick play, lookahead
//! - `ai`: seat strategies and role assignment
//! - `env`: the reset/step orchestrator driven by an external agent
//! - `config`, `telemetry`, `errors`: ambient plumbing

pub mod ai;
pub mod config;
pub mod domain;
pub mod env;
pub mod errors;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use env::{EnvError, Observation, PinochleEnv, StepInfo, StepOutcome};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
