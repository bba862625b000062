// Proptest generators for domain types.
// Hands are drawn from real deals so card multiplicities stay valid.

use proptest::prelude::*;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{BID_CEILING, PASS_SUBSETS, PLAYERS};
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Nine),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ten),
        Just(Rank::Ace),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Seed for a deal; every seed yields a valid four-hand deal.
pub fn deal_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Four dealt hands from a random seed.
pub fn dealt_hands() -> impl Strategy<Value = [Vec<Card>; PLAYERS]> {
    deal_seed().prop_filter_map("deal failed", |seed| deal_hands(seed).ok())
}

/// One hand of a random deal plus a strict subset of another hand's cards.
pub fn hand_and_extra() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    (dealt_hands(), 0usize..=12).prop_map(|(hands, take)| {
        let extra = hands[1].iter().take(take).copied().collect();
        (hands[0].clone(), extra)
    })
}

/// Raw bidding actions, deliberately including values beyond the ceiling.
pub fn raw_bid() -> impl Strategy<Value = u8> {
    prop_oneof![
        2 => Just(0u8),
        5 => 1u8..=BID_CEILING,
        1 => (BID_CEILING + 1)..=u8::MAX,
    ]
}

pub fn raw_bids(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(raw_bid(), len)
}

/// Raw pass actions, including indices that must wrap.
pub fn pass_index() -> impl Strategy<Value = usize> {
    prop_oneof![
        4 => 0usize..PASS_SUBSETS,
        1 => PASS_SUBSETS..(PASS_SUBSETS * 4),
    ]
}
