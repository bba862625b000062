use thiserror::Error;

use crate::ai::AiError;
use crate::config::ConfigError;
use crate::errors::domain::DomainError;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("strategy failed: {0}")]
    Strategy(#[from] AiError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EnvError {
    /// True for engine defects (lost cards, malformed tricks).
    pub fn is_invariant(&self) -> bool {
        match self {
            EnvError::Domain(e) => e.is_invariant(),
            EnvError::Strategy(AiError::Domain(e)) => e.is_invariant(),
            _ => false,
        }
    }
}
