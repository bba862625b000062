//! Competitive bidding state machine.
//!
//! Seats act round-robin starting at seat 0 with an opening bid of 20. A seat
//! either passes (and drops out) or raises strictly above the current bid.
//! Raw bid values are never rejected: they are clamped up to the minimum legal
//! raise (and to the 30 floor while the bid is below it) and down to the 50
//! ceiling. Bidding ends when one seat is left after somebody opened, or when
//! four passes in a row leave nobody willing to open (a redeal).

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::cards_logic::suit_counts;
use crate::domain::rules::{BID_CEILING, BID_FLOOR, OPENING_BID, PASS, PLAYERS};
use crate::domain::state::{next_seat, partner_of, Partnership, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// How bidding ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BidOutcome {
    Won { declarer: Seat, bid: u8 },
    /// Nobody opened; the hands must be redealt. Never scored.
    AllPassed,
}

/// The winning bid together with the trump it fixes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Contract {
    pub declarer: Seat,
    pub bid: u8,
    pub partnership: Partnership,
    pub trump: Suit,
}

impl Contract {
    /// Build the contract; trump is the longest suit in the declarer's hand.
    pub fn declare(declarer: Seat, bid: u8, declarer_hand: &[Card]) -> Self {
        Self {
            declarer,
            bid,
            partnership: Partnership::of(declarer),
            trump: select_trump(declarer_hand),
        }
    }
}

/// Suit with the most cards in `hand`; ties go to the earliest suit in
/// canonical order (Clubs, Diamonds, Hearts, Spades).
pub fn select_trump(hand: &[Card]) -> Suit {
    let counts = suit_counts(hand);
    let mut best = Suit::Clubs;
    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}

/// Result of one bidding turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BidResult {
    pub seat: Seat,
    /// Accepted bid after clamping; 0 when the seat passed.
    pub accepted: u8,
    pub outcome: Option<BidOutcome>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BidState {
    pub current_bid: u8,
    pub active: [bool; PLAYERS],
    pub turn: Seat,
    /// Every turn in order; bid 0 is a pass.
    pub history: Vec<(Seat, u8)>,
    /// Seat holding the highest accepted bid, once anyone has opened.
    pub high_bidder: Option<Seat>,
    pub consecutive_passes: u8,
    pub outcome: Option<BidOutcome>,
}

impl Default for BidState {
    fn default() -> Self {
        Self::new()
    }
}

impl BidState {
    pub fn new() -> Self {
        Self {
            current_bid: OPENING_BID,
            active: [true; PLAYERS],
            turn: 0,
            history: Vec::with_capacity(16),
            high_bidder: None,
            consecutive_passes: 0,
            outcome: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn opened(&self) -> bool {
        self.high_bidder.is_some()
    }

    /// Lowest bid a seat could make right now, or None when no raise exists.
    pub fn min_raise(&self) -> Option<u8> {
        if self.current_bid >= BID_CEILING {
            return None;
        }
        let mut min = self.current_bid + 1;
        if self.current_bid < BID_FLOOR {
            min = min.max(BID_FLOOR);
        }
        Some(min)
    }

    /// Whether `seat` is forced to pass: no raise is left, or both opponents
    /// are out while its partner is still in.
    pub fn must_pass(&self, seat: Seat) -> bool {
        if self.min_raise().is_none() {
            return true;
        }
        let opponents_out = !self.active[next_seat(seat) as usize]
            && !self.active[partner_of(next_seat(seat)) as usize];
        opponents_out && self.active[partner_of(seat) as usize]
    }

    /// Map a raw action onto the bid that will actually be recorded.
    pub fn resolve_bid(&self, seat: Seat, raw: u8) -> u8 {
        if raw == PASS || self.must_pass(seat) {
            return PASS;
        }
        match self.min_raise() {
            Some(min) => raw.clamp(min, BID_CEILING),
            None => PASS,
        }
    }

    /// Apply one bidding turn for `seat`.
    pub fn place_bid(&mut self, seat: Seat, raw: u8) -> Result<BidResult, DomainError> {
        if self.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Bidding already finished",
            ));
        }
        if seat != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Seat {seat} bid out of turn (expected {})", self.turn),
            ));
        }
        if !self.active[seat as usize] {
            return Err(DomainError::invariant(format!(
                "inactive seat {seat} holds the bidding turn"
            )));
        }

        let accepted = self.resolve_bid(seat, raw);
        self.history.push((seat, accepted));
        if accepted == PASS {
            self.active[seat as usize] = false;
            self.consecutive_passes += 1;
        } else {
            if accepted <= self.current_bid && self.opened() {
                return Err(DomainError::invariant(format!(
                    "accepted bid {accepted} does not exceed {}",
                    self.current_bid
                )));
            }
            self.current_bid = accepted;
            self.high_bidder = Some(seat);
            self.consecutive_passes = 0;
        }
        debug!(seat, raw, accepted, current_bid = self.current_bid, "Bid placed");

        self.outcome = self.check_terminal()?;
        if let Some(outcome) = self.outcome {
            info!(?outcome, history = ?self.history, "Bidding finished");
        } else {
            self.turn = self.next_active_after(seat)?;
        }

        Ok(BidResult {
            seat,
            accepted,
            outcome: self.outcome,
        })
    }

    fn check_terminal(&self) -> Result<Option<BidOutcome>, DomainError> {
        if self.consecutive_passes as usize >= PLAYERS {
            return Ok(Some(BidOutcome::AllPassed));
        }
        let Some(high) = self.high_bidder else {
            return Ok(None);
        };
        if self.active_count() != 1 {
            return Ok(None);
        }
        if !self.active[high as usize] {
            return Err(DomainError::invariant(format!(
                "last active seat is not the high bidder {high}"
            )));
        }
        Ok(Some(BidOutcome::Won {
            declarer: high,
            bid: self.current_bid,
        }))
    }

    fn next_active_after(&self, seat: Seat) -> Result<Seat, DomainError> {
        let mut candidate = next_seat(seat);
        for _ in 0..PLAYERS {
            if self.active[candidate as usize] {
                return Ok(candidate);
            }
            candidate = next_seat(candidate);
        }
        Err(DomainError::invariant("no active seat left to bid"))
    }
}
