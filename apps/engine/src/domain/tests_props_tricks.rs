//! Property tests for trick play.
//!
//! Properties tested:
//! - A full round is 48 plays with every dealt card played once
//! - Trick points always total 25 with the standard deck
//! - Legal sets are non-empty subsets of the hand
//! - Forced overtake picks the lowest beating card

use proptest::prelude::*;

use crate::domain::cards_logic::{best_in_suit, count_vector, lowest_beating};
use crate::domain::dealing::deal_hands;
use crate::domain::test_state_helpers::{random_round, trick_ready};
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every card is played exactly once and 25 points are shared out
    #[test]
    fn prop_full_round_conserves_cards_and_points(
        seed in test_gens::deal_seed(),
        declarer in 0u8..4,
        play_seed in any::<u64>(),
    ) {
        let done = random_round(seed, declarer, play_seed);
        prop_assert!(done.completed);
        prop_assert_eq!(done.plays.len(), 48);

        let played: Vec<Card> = done.plays.iter().map(|&(_, c)| c).collect();
        let dealt = deal_hands(seed).unwrap();
        prop_assert_eq!(count_vector(&played), count_vector(dealt.iter().flatten()));
        prop_assert_eq!(u32::from(done.trick_points[0]) + u32::from(done.trick_points[1]), 25);
        prop_assert_eq!(done.captured[0].len() + done.captured[1].len(), 48);
    }

    /// Property: legal sets are non-empty, drawn from the hand, and a forced
    /// overtake is the cheapest card that beats the trick
    #[test]
    fn prop_legal_sets_follow_the_rules(
        seed in test_gens::deal_seed(),
        declarer in 0u8..4,
        choices in prop::collection::vec(any::<prop::sample::Index>(), 48),
    ) {
        let (mut hands, mut progress) = trick_ready(seed, declarer);
        let trump = progress.contract.trump;
        for pick in choices {
            if progress.completed {
                break;
            }
            let trick = progress.current.clone();
            let seat = trick.to_act();
            let hand = hands[seat as usize].clone();
            let legal = legal_moves(&trick, seat, &hand);
            prop_assert!(!legal.is_empty());
            prop_assert!(legal.iter().all(|c| hand.contains(c)));

            if let Some(led) = trick.led_suit {
                let trump_played = trick.plays.iter().any(|(_, c)| c.suit == trump);
                let follow: Vec<Card> = hand.iter().copied().filter(|c| c.suit == led).collect();
                if !follow.is_empty() && !trump_played && led != trump {
                    let best = best_in_suit(trick.plays.iter().map(|(_, c)| c), led).unwrap();
                    if let Some(cheapest) = lowest_beating(&follow, best) {
                        prop_assert_eq!(&legal, &vec![cheapest]);
                    }
                }
            }

            let card = *pick.get(&legal);
            play_card(&mut hands, &mut progress, seat, card).unwrap();
        }
        prop_assert!(progress.completed);
        prop_assert!(hands.iter().all(Vec::is_empty));
    }
}
