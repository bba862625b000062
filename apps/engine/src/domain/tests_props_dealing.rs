//! Property tests for dealing.

use proptest::prelude::*;

use crate::domain::cards_logic::count_vector;
use crate::domain::dealing::{deal_hands, Deck};
use crate::domain::rules::HAND_SIZE;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every card of the deck is dealt exactly once
    #[test]
    fn prop_deal_covers_deck(seed in test_gens::deal_seed()) {
        let hands = deal_hands(seed).unwrap();
        let dealt = count_vector(hands.iter().flatten());
        let deck = count_vector(Deck::standard().cards());
        prop_assert_eq!(dealt, deck);
        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            prop_assert!(hand.windows(2).all(|w| w[0] <= w[1]), "hand not sorted");
        }
    }

    /// Property: the same seed always produces the same deal
    #[test]
    fn prop_deal_is_deterministic(seed in test_gens::deal_seed()) {
        prop_assert_eq!(deal_hands(seed).unwrap(), deal_hands(seed).unwrap());
    }

    /// Property: uneven splits differ by at most one card
    #[test]
    fn prop_uneven_deal_is_balanced(n in 1usize..=10) {
        let hands = Deck::standard().deal(n).unwrap();
        let min = hands.iter().map(Vec::len).min().unwrap();
        let max = hands.iter().map(Vec::len).max().unwrap();
        prop_assert!(max - min <= 1);
        prop_assert_eq!(hands.iter().map(Vec::len).sum::<usize>(), 48);
    }
}
