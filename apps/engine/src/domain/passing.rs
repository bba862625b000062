//! Partner exchange after a contract is won.
//!
//! The declarer's partner hands over three cards chosen by index into the
//! 220 lexicographic 3-subsets of their sorted 12-card hand. The declarer then
//! holds 15 cards and gives three back. Both hands end at 12 and their union
//! never changes.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::domain::cards_logic::count_vector;
use crate::domain::rules::{HAND_SIZE, PASS_CARDS, PASS_SUBSETS, PLAYERS};
use crate::domain::state::{partner_of, Seat};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PassCards = [Card; PASS_CARDS];

static SUBSETS: Lazy<Vec<[usize; PASS_CARDS]>> = Lazy::new(|| {
    let mut out = Vec::with_capacity(PASS_SUBSETS);
    for i in 0..HAND_SIZE {
        for j in (i + 1)..HAND_SIZE {
            for k in (j + 1)..HAND_SIZE {
                out.push([i, j, k]);
            }
        }
    }
    out
});

/// All 3-position subsets of a 12-card hand, lexicographically ordered.
pub fn subsets() -> &'static [[usize; PASS_CARDS]] {
    &SUBSETS
}

/// Positions for a raw pass action; out-of-range indices wrap around.
pub fn subset_for_index(index: usize) -> [usize; PASS_CARDS] {
    SUBSETS[index % PASS_SUBSETS]
}

/// Index of a position subset, if it is a valid ascending triple.
pub fn index_of_subset(positions: [usize; PASS_CARDS]) -> Option<usize> {
    SUBSETS.iter().position(|&s| s == positions)
}

/// Cards of `hand` selected by a pass index.
pub fn select_pass_cards(hand: &[Card], index: usize) -> Result<PassCards, DomainError> {
    if hand.len() != HAND_SIZE {
        return Err(DomainError::invariant(format!(
            "passer holds {} cards, expected {HAND_SIZE}",
            hand.len()
        )));
    }
    let mut sorted = hand.to_vec();
    sorted.sort();
    let [a, b, c] = subset_for_index(index);
    Ok([sorted[a], sorted[b], sorted[c]])
}

/// Default return rule: the three lowest cards by (rank, suit).
pub fn default_return(hand: &[Card]) -> Result<PassCards, DomainError> {
    if hand.len() < PASS_CARDS {
        return Err(DomainError::invariant(format!(
            "declarer holds only {} cards during the return",
            hand.len()
        )));
    }
    let mut by_rank = hand.to_vec();
    by_rank.sort_by_key(|c| (c.rank, c.suit));
    Ok([by_rank[0], by_rank[1], by_rank[2]])
}

/// Cards moved in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub passer: Seat,
    pub declarer: Seat,
    pub passed: PassCards,
    pub returned: PassCards,
}

/// Run the exchange. `choose_return` sees the declarer's 15-card hand.
pub fn exchange_with<E, F>(
    hands: &mut [Vec<Card>; PLAYERS],
    declarer: Seat,
    pass_index: usize,
    choose_return: F,
) -> Result<Exchange, E>
where
    E: From<DomainError>,
    F: FnOnce(&[Card]) -> Result<PassCards, E>,
{
    let passer = partner_of(declarer);
    let (d, p) = (declarer as usize, passer as usize);
    let before = count_vector(hands[d].iter().chain(hands[p].iter()));

    let passed = select_pass_cards(&hands[p], pass_index)?;
    hands[p] = without_cards(&hands[p], &passed)?;
    hands[d].extend_from_slice(&passed);
    hands[d].sort();

    let returned = choose_return(&hands[d])?;
    hands[d] = without_cards(&hands[d], &returned)?;
    hands[p].extend_from_slice(&returned);
    hands[p].sort();

    let after = count_vector(hands[d].iter().chain(hands[p].iter()));
    if before != after || hands[d].len() != HAND_SIZE || hands[p].len() != HAND_SIZE {
        return Err(DomainError::invariant(format!(
            "exchange changed the partnership cards (declarer {}, passer {})",
            hands[d].len(),
            hands[p].len()
        ))
        .into());
    }

    debug!(
        declarer,
        passer,
        pass_index = pass_index % PASS_SUBSETS,
        passed = ?passed,
        returned = ?returned,
        "Exchange complete"
    );
    Ok(Exchange {
        passer,
        declarer,
        passed,
        returned,
    })
}

/// Exchange using the default return rule.
pub fn exchange(
    hands: &mut [Vec<Card>; PLAYERS],
    declarer: Seat,
    pass_index: usize,
) -> Result<Exchange, DomainError> {
    exchange_with(hands, declarer, pass_index, default_return)
}

/// `hand` minus one copy of each card in `cards`; every card must be held.
fn without_cards(hand: &[Card], cards: &[Card]) -> Result<Vec<Card>, DomainError> {
    let mut rest = hand.to_vec();
    for card in cards {
        let Some(pos) = rest.iter().position(|c| c == card) else {
            return Err(DomainError::validation(
                ValidationKind::InvalidPassSelection,
                format!("{card} is not held"),
            ));
        };
        rest.remove(pos);
    }
    Ok(rest)
}
