//! Deck construction, shuffling and round-robin dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_logic::count_vector;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Which faces make up the deck and how many copies of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub ranks: Vec<Rank>,
    pub suits: Vec<Suit>,
    pub copies: u8,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            ranks: Rank::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
            copies: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build ranks x suits x copies, in unshuffled order.
    pub fn new(config: &DeckConfig) -> Self {
        let mut cards =
            Vec::with_capacity(config.ranks.len() * config.suits.len() * config.copies as usize);
        for _ in 0..config.copies {
            for &rank in &config.ranks {
                for &suit in &config.suits {
                    cards.push(Card { suit, rank });
                }
            }
        }
        Self { cards }
    }

    /// The 48-card pinochle deck.
    pub fn standard() -> Self {
        Self::new(&DeckConfig::default())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniform Fisher-Yates permutation driven by the injected RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Partition the deck round-robin into `n` hands.
    ///
    /// Every card lands in exactly one hand; hand sizes differ by at most one.
    pub fn deal(&self, n: usize) -> Result<Vec<Vec<Card>>, DomainError> {
        if n == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                "Cannot deal to zero hands",
            ));
        }
        let mut hands = vec![Vec::with_capacity(self.cards.len() / n + 1); n];
        for (i, &card) in self.cards.iter().enumerate() {
            hands[i % n].push(card);
        }
        for hand in &mut hands {
            hand.sort();
        }
        Ok(hands)
    }
}

/// Shuffle a standard deck with a seeded ChaCha stream and deal four sorted hands.
pub fn deal_hands(seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng);

    let dealt = deck.deal(PLAYERS)?;
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (slot, hand) in hands.iter_mut().zip(dealt) {
        *slot = hand;
    }
    ensure_cover(&hands, &deck)?;
    Ok(hands)
}

/// Check that `hands` together hold exactly the cards of `deck`.
pub fn ensure_cover(hands: &[Vec<Card>], deck: &Deck) -> Result<(), DomainError> {
    let held = count_vector(hands.iter().flatten());
    let expected = count_vector(deck.cards());
    if held != expected {
        return Err(DomainError::invariant(format!(
            "hands do not cover the deck: held {} cards, deck has {}",
            held.iter().map(|&n| n as usize).sum::<usize>(),
            deck.len()
        )));
    }
    Ok(())
}
