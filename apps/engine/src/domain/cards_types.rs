//! Core card-related types: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Canonical suit order. Also the trump tie-break order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// Card ranks in trick-taking strength order. Ten ranks above King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Nine,
    Jack,
    Queen,
    King,
    Ten,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];

    pub const fn index(self) -> usize {
        match self {
            Rank::Nine => 0,
            Rank::Jack => 1,
            Rank::Queen => 2,
            Rank::King => 3,
            Rank::Ten => 4,
            Rank::Ace => 5,
        }
    }

    /// Kings, tens and aces are counters worth one trick point each.
    pub const fn is_counter(self) -> bool {
        matches!(self, Rank::King | Rank::Ten | Rank::Ace)
    }
}

/// Number of distinct card faces (6 ranks x 4 suits).
pub const DISTINCT_CARDS: usize = 24;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Position in the canonical (suit-major, rank-minor) order, `0..24`.
    pub const fn canonical_index(self) -> usize {
        self.suit.index() * Rank::ALL.len() + self.rank.index()
    }

    pub fn from_canonical_index(idx: usize) -> Option<Card> {
        if idx >= DISTINCT_CARDS {
            return None;
        }
        let suit = Suit::ALL[idx / Rank::ALL.len()];
        let rank = Rank::ALL[idx % Rank::ALL.len()];
        Some(Card { suit, rank })
    }
}

// Ord on Card is the canonical sort: suit order C<D<H<S then rank strength.
// Trick resolution never uses it across suits.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
