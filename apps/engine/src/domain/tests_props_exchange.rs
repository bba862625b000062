//! Property tests for the partner exchange.

use proptest::prelude::*;

use crate::domain::cards_logic::count_vector;
use crate::domain::passing::{exchange, select_pass_cards};
use crate::domain::rules::HAND_SIZE;
use crate::domain::state::partner_of;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the partnership's 24 cards are unchanged by the exchange
    #[test]
    fn prop_exchange_preserves_union(
        hands in test_gens::dealt_hands(),
        declarer in 0u8..4,
        index in test_gens::pass_index(),
    ) {
        let mut after = hands.clone();
        let passer = partner_of(declarer);
        let ex = exchange(&mut after, declarer, index).unwrap();

        let union = |h: &[Vec<crate::domain::Card>; 4]| {
            count_vector(h[declarer as usize].iter().chain(h[passer as usize].iter()))
        };
        prop_assert_eq!(union(&hands), union(&after));
        prop_assert_eq!(after[declarer as usize].len(), HAND_SIZE);
        prop_assert_eq!(after[passer as usize].len(), HAND_SIZE);
        prop_assert_eq!(ex.passed, select_pass_cards(&hands[passer as usize], index).unwrap());
        prop_assert_eq!(count_vector(after.iter().flatten()), count_vector(hands.iter().flatten()));
    }
}
