//! Playing the rest of a round forward with a move chooser.
//!
//! Both the Monte Carlo estimator and the exhaustive pass evaluator run the
//! remaining tricks through [`play_out`]; they differ only in the chooser.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::rules::PLAYERS;
use crate::domain::state::Seat;
use crate::domain::tricks::{legal_moves, play_card, TrickProgress, TrickState};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Play every remaining card. `choose` gets the acting seat, the open trick,
/// and the non-empty sorted legal set, and must return a member of that set.
pub fn play_out<E, F>(
    mut hands: [Vec<Card>; PLAYERS],
    mut progress: TrickProgress,
    mut choose: F,
) -> Result<TrickProgress, E>
where
    E: From<DomainError>,
    F: FnMut(Seat, &TrickState, &[Card]) -> Result<Card, E>,
{
    while !progress.completed {
        let seat = progress.current.to_act();
        let legal = legal_moves(&progress.current, seat, &hands[seat as usize]);
        if legal.is_empty() {
            return Err(DomainError::invariant(format!(
                "seat {seat} has no legal play in trick {}",
                progress.current.trick_no
            ))
            .into());
        }
        let card = choose(seat, &progress.current, &legal)?;
        play_card(&mut hands, &mut progress, seat, card)?;
    }
    Ok(progress)
}

/// Uniform choice over the legal set.
pub fn random_choice<R: Rng + ?Sized>(rng: &mut R, legal: &[Card]) -> Result<Card, DomainError> {
    legal
        .choose(rng)
        .copied()
        .ok_or_else(|| DomainError::invariant("random choice over an empty legal set"))
}

/// Deterministic play: lead the highest non-trump card (the lowest card when
/// only trump is held), otherwise follow with the lowest legal card.
pub fn greedy_choice(trick: &TrickState, legal: &[Card]) -> Result<Card, DomainError> {
    let by_strength = |c: &&Card| (c.rank, c.suit);
    let choice = if trick.plays.is_empty() {
        legal
            .iter()
            .filter(|c| c.suit != trick.trump)
            .max_by_key(by_strength)
            .or_else(|| legal.iter().min_by_key(by_strength))
    } else {
        legal.iter().min_by_key(by_strength)
    };
    choice
        .copied()
        .ok_or_else(|| DomainError::invariant("greedy choice over an empty legal set"))
}
