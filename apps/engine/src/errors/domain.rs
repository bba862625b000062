//! Domain-level error type used by the rule engine and the orchestrator.
//!
//! Two families:
//! - `Validation`: a caller asked for something the rules do not allow.
//! - `Invariant`: the engine itself reached an impossible state (a card was
//!   duplicated or lost, a trick resolved with the wrong number of plays).
//!   These are defects and must be propagated, never absorbed.

use thiserror::Error;

/// Validation error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PhaseMismatch,
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    IllegalPlay,
    ParseCard,
    InvalidDeal,
    InvalidPassSelection,
    InvalidMeldPattern,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Structural invariant violation (engine defect)
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}
