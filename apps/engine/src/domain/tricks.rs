//! Trick play: legal moves, playing a card, resolving tricks.

use tracing::debug;

use crate::domain::bidding::Contract;
use crate::domain::cards_logic::{
    best_in_suit, card_beats, counter_points, hand_has_suit, lowest_beating,
};
use crate::domain::rules::{LAST_TRICK_BONUS, PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{nth_from, Partnership, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One trick in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickState {
    /// 0-based trick index within the round.
    pub trick_no: u8,
    pub leader: Seat,
    pub trump: Suit,
    /// Declarer of the contract; bound by the trump-ace lead rule.
    pub declarer: Seat,
    pub led_suit: Option<Suit>,
    pub plays: Vec<(Seat, Card)>,
}

impl TrickState {
    pub fn new(trick_no: u8, leader: Seat, contract: &Contract) -> Self {
        Self {
            trick_no,
            leader,
            trump: contract.trump,
            declarer: contract.declarer,
            led_suit: None,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// Seat expected to play next.
    pub fn to_act(&self) -> Seat {
        nth_from(self.leader, self.plays.len() as u8)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    pub fn is_last(&self) -> bool {
        self.trick_no + 1 == TRICKS_PER_ROUND
    }

    fn played_cards(&self) -> impl Iterator<Item = &Card> {
        self.plays.iter().map(|(_, c)| c)
    }
}

/// Trick-play progress for a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickProgress {
    pub contract: Contract,
    pub current: TrickState,
    /// Cards captured per partnership.
    pub captured: [Vec<Card>; 2],
    /// Trick points per partnership, last-trick bonus included.
    pub trick_points: [u8; 2],
    /// Every (seat, card) play of the round in order.
    pub plays: Vec<(Seat, Card)>,
    pub completed: bool,
}

impl TrickProgress {
    /// First trick is led by the declarer.
    pub fn new(contract: Contract) -> Self {
        Self {
            current: TrickState::new(0, contract.declarer, &contract),
            contract,
            captured: [Vec::new(), Vec::new()],
            trick_points: [0, 0],
            plays: Vec::with_capacity(PLAYERS * TRICKS_PER_ROUND as usize),
            completed: false,
        }
    }

    pub fn points_for(&self, side: Partnership) -> u8 {
        self.trick_points[side.index()]
    }
}

/// Result of playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    pub trick_completed: bool,
    pub trick_winner: Option<Seat>,
    /// Points captured by the completed trick (0 while the trick is open).
    pub points: u8,
    pub round_completed: bool,
}

/// Cards `seat` may play into `trick`, sorted and without duplicates.
pub fn legal_moves(trick: &TrickState, seat: Seat, hand: &[Card]) -> Vec<Card> {
    let trump = trick.trump;
    let mut legal: Vec<Card> = match trick.led_suit {
        None => {
            let trump_ace = hand
                .iter()
                .find(|c| c.suit == trump && c.rank == Rank::Ace)
                .copied();
            match trump_ace {
                Some(ace) if seat == trick.declarer => return vec![ace],
                _ => hand.to_vec(),
            }
        }
        Some(led) => {
            let follow: Vec<Card> = hand.iter().copied().filter(|c| c.suit == led).collect();
            if !follow.is_empty() {
                let trump_played = trick.played_cards().any(|c| c.suit == trump);
                if !trump_played && led != trump {
                    // Forced overtake: the cheapest card that beats the best so far.
                    if let Some(best) = best_in_suit(trick.played_cards(), led) {
                        if let Some(card) = lowest_beating(&follow, best) {
                            return vec![card];
                        }
                    }
                }
                follow
            } else {
                let trumps: Vec<Card> =
                    hand.iter().copied().filter(|c| c.suit == trump).collect();
                if trumps.is_empty() {
                    hand.to_vec()
                } else {
                    if let Some(best) = best_in_suit(trick.played_cards(), trump) {
                        if let Some(card) = lowest_beating(&trumps, best) {
                            return vec![card];
                        }
                    }
                    trumps
                }
            }
        }
    };
    legal.sort();
    legal.dedup();
    legal
}

/// Winner of a complete trick and the winning card.
pub fn resolve_trick(trick: &TrickState) -> Result<(Seat, Card), DomainError> {
    if !trick.is_complete() {
        return Err(DomainError::invariant(format!(
            "trick {} resolved with {} plays",
            trick.trick_no,
            trick.plays.len()
        )));
    }
    let lead = trick
        .led_suit
        .ok_or_else(|| DomainError::invariant("complete trick has no led suit"))?;

    let mut best = trick.plays[0];
    for &(seat, card) in &trick.plays[1..] {
        if card_beats(card, best.1, lead, trick.trump) {
            best = (seat, card);
        }
    }
    Ok(best)
}

/// Points a complete trick is worth to whoever wins it.
pub fn trick_value(trick: &TrickState) -> u8 {
    let bonus = if trick.is_last() { LAST_TRICK_BONUS } else { 0 };
    counter_points(trick.played_cards()) + bonus
}

/// Play `card` for `seat`, enforcing turn, ownership and the follow rules.
pub fn play_card(
    hands: &mut [Vec<Card>; PLAYERS],
    progress: &mut TrickProgress,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if progress.completed {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "All tricks have been played",
        ));
    }

    let trick = &progress.current;
    let expected = trick.to_act();
    if seat != expected {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Seat {seat} played out of turn (expected {expected})"),
        ));
    }

    let hand = &hands[seat as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} not in seat {seat}'s hand"),
        ));
    };

    if !legal_moves(trick, seat, hand).contains(&card) {
        let kind = match trick.led_suit {
            Some(led) if card.suit != led && hand_has_suit(hand, led) => {
                ValidationKind::MustFollowSuit
            }
            _ => ValidationKind::IllegalPlay,
        };
        return Err(DomainError::validation(
            kind,
            format!("{card} is not a legal play for seat {seat}"),
        ));
    }

    let removed = hands[seat as usize].remove(pos);
    let trick = &mut progress.current;
    if trick.plays.is_empty() {
        trick.led_suit = Some(removed.suit);
    }
    trick.plays.push((seat, removed));
    progress.plays.push((seat, removed));
    debug!(seat, card = %removed, trick_no = trick.trick_no, "Card played");

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        points: 0,
        round_completed: false,
    };
    if !trick.is_complete() {
        return Ok(result);
    }

    let (winner, winning_card) = resolve_trick(trick)?;
    let points = trick_value(trick);
    let side = Partnership::of(winner);
    progress.captured[side.index()].extend(trick.played_cards().copied());
    progress.trick_points[side.index()] += points;
    debug!(
        trick_no = trick.trick_no,
        winner,
        card = %winning_card,
        points,
        "Trick resolved"
    );

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.points = points;

    if trick.is_last() {
        progress.completed = true;
        result.round_completed = true;
    } else {
        let next_no = trick.trick_no + 1;
        progress.current = TrickState::new(next_no, winner, &progress.contract);
    }
    Ok(result)
}
