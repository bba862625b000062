use std::fmt;

use serde::Serialize;

use crate::domain::bidding::{BidState, Contract};
use crate::domain::passing::Exchange;
use crate::domain::rules::PLAYERS;
use crate::domain::tricks::TrickProgress;
use crate::domain::Card;
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3

/// The two fixed partnerships: seats {0, 2} and {1, 3}.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Partnership {
    NorthSouth,
    EastWest,
}

impl Partnership {
    pub const fn of(seat: Seat) -> Self {
        if seat % 2 == 0 {
            Partnership::NorthSouth
        } else {
            Partnership::EastWest
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Partnership::NorthSouth => 0,
            Partnership::EastWest => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Partnership::NorthSouth => Partnership::EastWest,
            Partnership::EastWest => Partnership::NorthSouth,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Partnership::NorthSouth => [0, 2],
            Partnership::EastWest => [1, 3],
        }
    }
}

/// Round progression. Each variant is entered exactly once per round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Seats bid in fixed turn order.
    Bidding,
    /// Declarer's partner passes three cards; declarer returns three.
    Passing,
    /// Playing tricks; `trick_no` is 0-based.
    Trick { trick_no: u8 },
    /// Round scored (or redealt).
    Terminal,
}

impl Phase {
    /// Numeric phase indicator exposed in observations.
    pub const fn tag(self) -> u8 {
        match self {
            Phase::Bidding => 0,
            Phase::Passing => 1,
            Phase::Trick { .. } => 2,
            Phase::Terminal => 3,
        }
    }
}

/// Everything one round owns. Passed by reference across phase transitions.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: Phase,
    pub hands: [Vec<Card>; PLAYERS],
    pub bidding: BidState,
    /// Set once bidding produces a winner.
    pub contract: Option<Contract>,
    /// Cards moved between the partners, once the exchange ran.
    pub exchange: Option<Exchange>,
    /// Meld per partnership, fixed when trick play begins.
    pub meld: [u32; 2],
    /// Trick-play progress, present from the first trick on.
    pub tricks: Option<TrickProgress>,
}

impl RoundState {
    pub fn new(hands: [Vec<Card>; PLAYERS]) -> Self {
        Self {
            phase: Phase::Bidding,
            hands,
            bidding: BidState::new(),
            contract: None,
            exchange: None,
            meld: [0, 0],
            tricks: None,
        }
    }

    pub fn require_contract(&self, ctx: &'static str) -> Result<Contract, DomainError> {
        self.contract.ok_or_else(|| {
            DomainError::invariant(format!("contract must be set ({ctx})"))
        })
    }

    /// Cards in hands plus cards already played.
    pub fn total_cards(&self) -> usize {
        let played = self.tricks.as_ref().map_or(0, |t| t.plays.len());
        self.hands.iter().map(Vec::len).sum::<usize>() + played
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phase: {:?}", self.phase)?;
        for (seat, hand) in self.hands.iter().enumerate() {
            let cards: Vec<String> = hand.iter().map(Card::to_string).collect();
            writeln!(f, " Seat {seat}: {}", cards.join(" "))?;
        }
        match self.contract {
            Some(c) => writeln!(
                f,
                "Contract: seat {} bid {} trump {:?}",
                c.declarer, c.bid, c.trump
            )?,
            None => writeln!(
                f,
                "Bidding: current {} history {:?}",
                self.bidding.current_bid, self.bidding.history
            )?,
        }
        if let Some(tricks) = &self.tricks {
            let current: Vec<String> = tricks
                .current
                .plays
                .iter()
                .map(|(seat, card)| format!("{seat}:{card}"))
                .collect();
            writeln!(
                f,
                "Trick {}: [{}] points NS {} EW {}",
                tricks.current.trick_no,
                current.join(" "),
                tricks.trick_points[0],
                tricks.trick_points[1]
            )?;
        }
        Ok(())
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3). Clockwise is +1.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

/// Seat that acts `n` plays after `start` within a trick.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}
