//! Property tests for meld scoring.

use proptest::prelude::*;

use crate::domain::meld::MeldTable;
use crate::domain::{test_gens, test_prelude, Card, Rank, Suit};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: adding cards never lowers meld
    #[test]
    fn prop_meld_is_monotonic((hand, extra) in test_gens::hand_and_extra()) {
        let table = MeldTable::standard();
        let base = table.evaluate(&hand);
        let mut bigger = hand.clone();
        bigger.extend(extra);
        prop_assert!(table.evaluate(&bigger) >= base);
    }

    /// Property: meld equals the sum of the satisfied patterns
    #[test]
    fn prop_meld_matches_breakdown(hands in test_gens::dealt_hands()) {
        let table = MeldTable::standard();
        for hand in &hands {
            let sum: u32 = table.breakdown(hand).iter().map(|p| p.points).sum();
            prop_assert_eq!(table.evaluate(hand), sum);
        }
    }

    /// Property: hands without any meld card score nothing
    #[test]
    fn prop_nines_only_score_zero(suits in prop::collection::vec(test_gens::suit(), 0..=8)) {
        let table = MeldTable::standard();
        let hand: Vec<Card> = suits.into_iter().map(|s| Card::new(Rank::Nine, s)).collect();
        prop_assert_eq!(table.evaluate(&hand), 0);
    }
}

#[test]
fn eight_aces_score_at_least_all_aces() {
    let table = MeldTable::standard();
    let mut hand = Vec::new();
    for suit in Suit::ALL {
        hand.push(Card::new(Rank::Ace, suit));
        hand.push(Card::new(Rank::Ace, suit));
    }
    let all_aces = table.pattern("All Aces").unwrap().points;
    let score = table.evaluate(&hand);
    assert!(score >= all_aces);
    let sum: u32 = table.breakdown(&hand).iter().map(|p| p.points).sum();
    assert_eq!(score, sum);
}
