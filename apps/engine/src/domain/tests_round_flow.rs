//! Whole-round walkthroughs through the phase transition functions.

use crate::domain::bidding::BidOutcome;
use crate::domain::dealing::deal_hands;
use crate::domain::meld::MeldTable;
use crate::domain::passing::default_return;
use crate::domain::round_flow::{apply_bid, apply_exchange_with, apply_play, begin_tricks, finish};
use crate::domain::simulate::greedy_choice;
use crate::domain::state::{Phase, RoundState};
use crate::domain::tricks::legal_moves;
use crate::errors::domain::{DomainError, ValidationKind};

fn dealt_round(seed: u64) -> RoundState {
    RoundState::new(deal_hands(seed).unwrap())
}

#[test]
fn full_round_reaches_scoring() {
    let table = MeldTable::standard();
    let mut state = dealt_round(31);

    // seat 0 opens, everyone else passes
    apply_bid(&mut state, 0, 30).unwrap();
    apply_bid(&mut state, 1, 0).unwrap();
    apply_bid(&mut state, 2, 0).unwrap();
    let r = apply_bid(&mut state, 3, 0).unwrap();
    assert_eq!(
        r.outcome,
        Some(BidOutcome::Won {
            declarer: 0,
            bid: 30
        })
    );
    assert_eq!(state.phase, Phase::Passing);

    let ex = apply_exchange_with::<DomainError, _>(&mut state, 7, default_return).unwrap();
    assert_eq!(ex.passer, 2);
    begin_tricks(&mut state, &table).unwrap();
    assert_eq!(state.phase, Phase::Trick { trick_no: 0 });
    assert_eq!(state.total_cards(), 48);

    while state.phase != Phase::Terminal {
        let trick = state.tricks.as_ref().unwrap().current.clone();
        let seat = trick.to_act();
        let legal = legal_moves(&trick, seat, &state.hands[seat as usize]);
        let card = greedy_choice(&trick, &legal).unwrap();
        apply_play(&mut state, seat, card).unwrap();
        assert_eq!(state.total_cards(), 48);
    }

    let result = finish(&state).unwrap();
    assert_eq!(
        u32::from(result.trick_points[0]) + u32::from(result.trick_points[1]),
        25
    );
    assert_eq!(result.meld, state.meld);
    assert_eq!(
        result.contract_met,
        result.totals[result.contract.partnership.index()] >= 30
    );
}

#[test]
fn all_pass_ends_round_without_contract() {
    let mut state = dealt_round(8);
    for seat in 0..4 {
        apply_bid(&mut state, seat, 0).unwrap();
    }
    assert_eq!(state.phase, Phase::Terminal);
    assert!(state.contract.is_none());
    assert!(finish(&state).is_err());
}

#[test]
fn transitions_reject_wrong_phase() {
    let table = MeldTable::standard();
    let mut state = dealt_round(9);

    let err = begin_tricks(&mut state, &table).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    let card = state.hands[0][0];
    let err = apply_play(&mut state, 0, card).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
}

#[test]
fn begin_tricks_requires_exchange() {
    let table = MeldTable::standard();
    let mut state = dealt_round(10);
    apply_bid(&mut state, 0, 35).unwrap();
    for seat in 1..4 {
        apply_bid(&mut state, seat, 0).unwrap();
    }
    assert!(begin_tricks(&mut state, &table).is_err());
}

#[test]
fn lost_card_is_an_invariant_violation() {
    let table = MeldTable::standard();
    let mut state = dealt_round(11);
    apply_bid(&mut state, 0, 35).unwrap();
    for seat in 1..4 {
        apply_bid(&mut state, seat, 0).unwrap();
    }
    apply_exchange_with::<DomainError, _>(&mut state, 0, default_return).unwrap();
    state.hands[3].pop();
    assert!(begin_tricks(&mut state, &table).unwrap_err().is_invariant());
}
