//! Meld scoring: bonus points for holding card combinations.
//!
//! Every pattern is checked independently. Overlapping patterns both score
//! (a double run also satisfies the single run and both marriages); the point
//! values in the table are set with that double counting in mind.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::count_vector;
use crate::domain::{Card, Rank, Suit, DISTINCT_CARDS};
use crate::errors::domain::{DomainError, ValidationKind};

/// A required multiset of cards and the points it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldPattern {
    pub name: String,
    pub cards: Vec<Card>,
    /// Copies of every listed card the hand must hold.
    pub required: u8,
    pub points: u32,
}

impl MeldPattern {
    pub fn new(name: impl Into<String>, cards: Vec<Card>, required: u8, points: u32) -> Self {
        Self {
            name: name.into(),
            cards,
            required,
            points,
        }
    }

    fn is_met(&self, counts: &[u8; DISTINCT_CARDS]) -> bool {
        self.cards
            .iter()
            .all(|c| counts[c.canonical_index()] >= self.required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeldTable {
    patterns: Vec<MeldPattern>,
}

impl Default for MeldTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl MeldTable {
    pub fn new(patterns: Vec<MeldPattern>) -> Result<Self, DomainError> {
        let table = Self { patterns };
        table.validate()?;
        Ok(table)
    }

    /// The four-handed partnership table.
    pub fn standard() -> Self {
        let mut patterns = Vec::with_capacity(26);

        let rounds = [
            (Rank::Ace, "Aces", 10, 90),
            (Rank::King, "Kings", 8, 72),
            (Rank::Queen, "Queens", 6, 54),
            (Rank::Jack, "Jacks", 4, 36),
        ];
        for (rank, label, single, double) in rounds {
            let cards: Vec<Card> = Suit::ALL.iter().map(|&s| Card::new(rank, s)).collect();
            patterns.push(MeldPattern::new(
                format!("Round Of {label}"),
                cards.clone(),
                1,
                single,
            ));
            patterns.push(MeldPattern::new(format!("All {label}"), cards, 2, double));
        }

        for suit in Suit::ALL {
            let marriage = vec![Card::new(Rank::King, suit), Card::new(Rank::Queen, suit)];
            patterns.push(MeldPattern::new(
                format!("Marriage {suit:?}"),
                marriage.clone(),
                1,
                2,
            ));
            patterns.push(MeldPattern::new(
                format!("Double Marriage {suit:?}"),
                marriage,
                2,
                2,
            ));
        }

        for suit in Suit::ALL {
            let run: Vec<Card> = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ten, Rank::Ace]
                .iter()
                .map(|&r| Card::new(r, suit))
                .collect();
            // 13 rather than 15: the run's marriage already scores 2
            patterns.push(MeldPattern::new(
                format!("Run in {suit:?}"),
                run.clone(),
                1,
                13,
            ));
            patterns.push(MeldPattern::new(
                format!("Double Run in {suit:?}"),
                run,
                2,
                133,
            ));
        }

        let pinochle = vec![
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Diamonds),
        ];
        patterns.push(MeldPattern::new("Pinochle", pinochle.clone(), 1, 4));
        patterns.push(MeldPattern::new("Double Pinochle", pinochle, 2, 26));

        Self { patterns }
    }

    pub fn patterns(&self) -> &[MeldPattern] {
        &self.patterns
    }

    pub fn pattern(&self, name: &str) -> Option<&MeldPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Reject patterns that could never be met or would always be met.
    pub fn validate(&self) -> Result<(), DomainError> {
        for p in &self.patterns {
            if p.cards.is_empty() || p.required == 0 {
                return Err(DomainError::validation(
                    ValidationKind::InvalidMeldPattern,
                    format!("meld pattern '{}' has no requirement", p.name),
                ));
            }
        }
        Ok(())
    }

    /// Total meld for a hand.
    pub fn evaluate(&self, hand: &[Card]) -> u32 {
        let counts = count_vector(hand);
        self.patterns
            .iter()
            .filter(|p| p.is_met(&counts))
            .map(|p| p.points)
            .sum()
    }

    /// Patterns a hand satisfies, in table order.
    pub fn breakdown(&self, hand: &[Card]) -> Vec<&MeldPattern> {
        let counts = count_vector(hand);
        self.patterns.iter().filter(|p| p.is_met(&counts)).collect()
    }
}
