//! Card game logic: suit queries, trick strength, counting points

use super::cards_types::{Card, Rank, Suit, DISTINCT_CARDS};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` given the led suit and trump.
///
/// Identical cards never beat each other, so the earlier play keeps the trick.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump != b_trump {
        return a_trump;
    }
    if a_trump {
        return a.rank > b.rank;
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows != b_follows {
        return a_follows;
    }
    a_follows && a.rank > b.rank
}

/// Lowest card (by rank) strictly above `floor` among `cards`.
pub fn lowest_beating(cards: &[Card], floor: Rank) -> Option<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.rank > floor)
        .min_by_key(|c| c.rank)
}

/// Highest rank among cards of `suit`.
pub fn best_in_suit<'a>(cards: impl IntoIterator<Item = &'a Card>, suit: Suit) -> Option<Rank> {
    cards
        .into_iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.rank)
        .max()
}

/// Trick points carried by a set of captured cards.
pub fn counter_points<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    cards.into_iter().filter(|c| c.rank.is_counter()).count() as u8
}

/// Number of cards of each suit in canonical suit order.
pub fn suit_counts(hand: &[Card]) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for card in hand {
        counts[card.suit.index()] += 1;
    }
    counts
}

/// Copies held of every distinct face, indexed canonically.
pub fn count_vector<'a>(cards: impl IntoIterator<Item = &'a Card>) -> [u8; DISTINCT_CARDS] {
    let mut counts = [0u8; DISTINCT_CARDS];
    for card in cards {
        counts[card.canonical_index()] += 1;
    }
    counts
}
