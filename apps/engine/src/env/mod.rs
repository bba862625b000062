//! Round orchestrator exposing the observation/action/reward contract.
//!
//! The external agent controls seat 0; all other seats are played by role
//! strategies. See [`PinochleEnv`].

mod error;
pub mod observation;
pub mod orchestrator;

pub use error::EnvError;
pub use observation::Observation;
pub use orchestrator::{PassSummary, PinochleEnv, StepInfo, StepOutcome, AGENT_SEAT};
