//! Property tests for the bidding state machine.

use proptest::prelude::*;

use crate::domain::bidding::{BidOutcome, BidState};
use crate::domain::rules::{BID_CEILING, BID_FLOOR, PASS, PLAYERS};
use crate::domain::{test_gens, test_prelude};

/// Feed raw actions (cycling) to whoever holds the turn until bidding ends.
fn run_bidding(raw: &[u8]) -> BidState {
    let mut state = BidState::new();
    let mut i = 0;
    while !state.is_terminal() {
        let seat = state.turn;
        state.place_bid(seat, raw[i % raw.len()]).unwrap();
        i += 1;
        assert!(i < 200, "bidding did not terminate");
    }
    state
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: accepted bids strictly increase and stay within [30, 50]
    #[test]
    fn prop_accepted_bids_are_bounded_and_increasing(raw in test_gens::raw_bids(32)) {
        let state = run_bidding(&raw);
        let accepted: Vec<u8> = state
            .history
            .iter()
            .map(|&(_, b)| b)
            .filter(|&b| b != PASS)
            .collect();
        for b in &accepted {
            prop_assert!((BID_FLOOR..=BID_CEILING).contains(b), "bid {} out of bounds", b);
        }
        prop_assert!(accepted.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: a winner is the only active seat and holds the last raise
    #[test]
    fn prop_outcome_is_consistent(raw in test_gens::raw_bids(16)) {
        let state = run_bidding(&raw);
        match state.outcome {
            Some(BidOutcome::Won { declarer, bid }) => {
                prop_assert_eq!(state.active_count(), 1);
                prop_assert!(state.active[declarer as usize]);
                prop_assert_eq!(bid, state.current_bid);
                let last_raise = state.history.iter().rev().find(|&&(_, b)| b != PASS);
                prop_assert_eq!(last_raise, Some(&(declarer, bid)));
            }
            Some(BidOutcome::AllPassed) => {
                prop_assert_eq!(state.history.len(), PLAYERS);
                prop_assert!(state.history.iter().all(|&(_, b)| b == PASS));
            }
            None => prop_assert!(false, "bidding left unfinished"),
        }
    }

    /// Property: pass-only actions redeal, in seat order
    #[test]
    fn prop_all_passes_redeal(len in 1usize..8) {
        let state = run_bidding(&vec![PASS; len]);
        prop_assert_eq!(state.outcome, Some(BidOutcome::AllPassed));
        let seats: Vec<u8> = state.history.iter().map(|&(s, _)| s).collect();
        prop_assert_eq!(seats, vec![0, 1, 2, 3]);
    }
}
