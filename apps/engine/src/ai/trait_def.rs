//! Seat strategy trait and the views it decides from.

use thiserror::Error;

use crate::domain::bidding::{BidState, Contract};
use crate::domain::meld::MeldTable;
use crate::domain::passing::{default_return, PassCards};
use crate::domain::rules::{BID_CEILING, PASS};
use crate::domain::state::Seat;
use crate::domain::tricks::{legal_moves, TrickState};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Errors that can occur during a strategy decision.
#[derive(Debug, Error)]
pub enum AiError {
    /// Strategy hit an internal failure (poisoned lock, empty choice set)
    #[error("AI internal error: {0}")]
    Internal(String),
    /// Strategy produced a move the rules reject
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a seat sees when it must bid.
#[derive(Debug, Clone, Copy)]
pub struct BidView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub bidding: &'a BidState,
    pub meld_table: &'a MeldTable,
}

impl BidView<'_> {
    /// Pass plus every raise the bidding would accept unchanged.
    pub fn legal_bids(&self) -> Vec<u8> {
        let mut bids = vec![PASS];
        if !self.bidding.must_pass(self.seat) {
            if let Some(min) = self.bidding.min_raise() {
                bids.extend(min..=BID_CEILING);
            }
        }
        bids
    }

    pub fn meld(&self) -> u32 {
        self.meld_table.evaluate(self.hand)
    }
}

/// What a seat sees during the exchange: the passer's 12 cards, or the
/// declarer's 15 when returning.
#[derive(Debug, Clone, Copy)]
pub struct PassView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub contract: &'a Contract,
}

/// What a seat sees when it must play a card.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub trick: &'a TrickState,
}

impl PlayView<'_> {
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_moves(self.trick, self.seat, self.hand)
    }
}

/// Decision-making for one seat.
///
/// Implementations choose from the legal options the views expose; the
/// engine still validates every answer.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw bid action; 0 passes. Out-of-range values are clamped by the engine.
    fn choose_bid(&self, view: &BidView<'_>) -> Result<u8, AiError>;

    /// Index into the 220 three-card subsets of the sorted hand.
    fn choose_pass(&self, view: &PassView<'_>) -> Result<usize, AiError>;

    /// Three cards the declarer hands back. Defaults to the lowest three.
    fn choose_return(&self, view: &PassView<'_>) -> Result<PassCards, AiError> {
        Ok(default_return(view.hand)?)
    }

    fn choose_play(&self, view: &PlayView<'_>) -> Result<Card, AiError>;
}
