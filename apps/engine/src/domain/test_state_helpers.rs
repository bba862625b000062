//! Test-only helpers for building rounds in a given phase.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::Contract;
use crate::domain::dealing::deal_hands;
use crate::domain::rules::PLAYERS;
use crate::domain::simulate::{play_out, random_choice};
use crate::domain::state::Seat;
use crate::domain::tricks::TrickProgress;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// A fresh deal with a 30-point contract for `declarer`, ready for trick 0.
pub fn trick_ready(seed: u64, declarer: Seat) -> ([Vec<Card>; PLAYERS], TrickProgress) {
    let hands = deal_hands(seed).unwrap();
    let contract = Contract::declare(declarer, 30, &hands[declarer as usize]);
    (hands, TrickProgress::new(contract))
}

/// Play a whole round with uniform random choices.
pub fn random_round(seed: u64, declarer: Seat, play_seed: u64) -> TrickProgress {
    let (hands, progress) = trick_ready(seed, declarer);
    let mut rng = ChaCha8Rng::seed_from_u64(play_seed);
    play_out::<DomainError, _>(hands, progress, |_, _, legal| random_choice(&mut rng, legal))
        .unwrap()
}
