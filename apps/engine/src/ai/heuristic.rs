//! Heuristic: a simple rule-of-thumb baseline.
//!
//! Bidding: raise by 1 to 4 over the current bid while meld is within the
//! threshold of it (meld >= current - threshold), otherwise pass.
//! Passing: hand the declarer the three strongest cards, trump first.
//! Play: lead the highest non-trump card; follow with the lowest legal card.

use std::sync::Mutex;

use rand::prelude::*;

use crate::ai::{AiError, BidView, PassView, PlayView, Strategy};
use crate::domain::passing::index_of_subset;
use crate::domain::rules::{PASS, PASS_CARDS};
use crate::domain::simulate::greedy_choice;
use crate::domain::{Card, Suit};

pub const DEFAULT_BID_THRESHOLD: u32 = 10;

pub struct Heuristic {
    bid_threshold: u32,
    /// Only used for the size of a raise.
    rng: Mutex<StdRng>,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_threshold(seed, DEFAULT_BID_THRESHOLD)
    }

    pub fn with_threshold(seed: Option<u64>, bid_threshold: u32) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            bid_threshold,
            rng: Mutex::new(rng),
        }
    }

    /// Positions (ascending) of the three cards to pass in the sorted hand.
    fn strongest_positions(sorted: &[Card], trump: Suit) -> [usize; PASS_CARDS] {
        let mut order: Vec<usize> = (0..sorted.len()).collect();
        // trump first, then by rank, ties to the later canonical position
        order.sort_by_key(|&i| {
            let c = sorted[i];
            std::cmp::Reverse((c.suit == trump, c.rank, i))
        });
        let mut picked = [order[0], order[1], order[2]];
        picked.sort_unstable();
        picked
    }
}

impl Strategy for Heuristic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_bid(&self, view: &BidView<'_>) -> Result<u8, AiError> {
        if view.bidding.must_pass(view.seat) {
            return Ok(PASS);
        }
        let current = u32::from(view.bidding.current_bid);
        if view.meld() + self.bid_threshold < current {
            return Ok(PASS);
        }
        let bump: u8 = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
            rng.random_range(0..=3)
        };
        Ok(view.bidding.current_bid.saturating_add(1 + bump))
    }

    fn choose_pass(&self, view: &PassView<'_>) -> Result<usize, AiError> {
        if view.hand.len() < PASS_CARDS {
            return Err(AiError::InvalidMove(format!(
                "cannot pass from a {}-card hand",
                view.hand.len()
            )));
        }
        let mut sorted = view.hand.to_vec();
        sorted.sort();
        let positions = Self::strongest_positions(&sorted, view.contract.trump);
        index_of_subset(positions)
            .ok_or_else(|| AiError::Internal(format!("no subset for positions {positions:?}")))
    }

    fn choose_play(&self, view: &PlayView<'_>) -> Result<Card, AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        Ok(greedy_choice(view.trick, &legal)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bidding::{BidState, Contract};
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::meld::MeldTable;
    use crate::domain::passing::select_pass_cards;
    use crate::domain::state::Partnership;

    #[test]
    fn bids_with_meld_and_passes_without() {
        let ai = Heuristic::new(Some(1));
        let table = MeldTable::standard();
        let bidding = BidState::new();

        let rich = try_parse_cards(["AC", "AD", "AH", "AS", "KS", "QS"]).unwrap();
        let view = BidView {
            seat: 0,
            hand: &rich,
            bidding: &bidding,
            meld_table: &table,
        };
        let bid = ai.choose_bid(&view).unwrap();
        assert!((21..=24).contains(&bid), "bid {bid}");

        let poor = try_parse_cards(["9C", "9D"]).unwrap();
        let view = BidView { hand: &poor, ..view };
        assert_eq!(ai.choose_bid(&view).unwrap(), PASS);
    }

    #[test]
    fn passes_strongest_trump_first() {
        let ai = Heuristic::new(None);
        let hand = try_parse_cards([
            "9C", "JC", "AC", "9D", "AD", "9H", "JH", "9S", "JS", "QS", "KS", "10S",
        ])
        .unwrap();
        let contract = Contract {
            declarer: 2,
            bid: 30,
            partnership: Partnership::NorthSouth,
            trump: Suit::Spades,
        };
        let index = ai
            .choose_pass(&PassView {
                seat: 0,
                hand: &hand,
                contract: &contract,
            })
            .unwrap();
        let mut passed: Vec<String> = select_pass_cards(&hand, index)
            .unwrap()
            .iter()
            .map(Card::to_string)
            .collect();
        passed.sort();
        assert_eq!(passed, vec!["10S", "KS", "QS"]);
    }
}
