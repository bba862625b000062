//! Random strategy: uniform over legal choices, seedable for tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, BidView, PassView, PlayView, Strategy};
use crate::domain::rules::PASS_SUBSETS;
use crate::domain::Card;

/// Strategy that picks uniformly among legal moves.
///
/// The RNG sits behind a `Mutex` because `Strategy` methods take `&self`.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl Strategy for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_bid(&self, view: &BidView<'_>) -> Result<u8, AiError> {
        self.pick(&view.legal_bids(), "bids")
    }

    fn choose_pass(&self, _view: &PassView<'_>) -> Result<usize, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(rng.random_range(0..PASS_SUBSETS))
    }

    fn choose_play(&self, view: &PlayView<'_>) -> Result<Card, AiError> {
        self.pick(&view.legal_plays(), "plays")
    }
}
