//! Phase transitions for a single round.
//!
//! Bidding -> Passing -> Trick { 0..=11 } -> Terminal, or Bidding -> Terminal
//! when every seat passes. Each function checks the phase it expects and
//! advances `RoundState::phase` itself.

use tracing::{info, warn};

use crate::domain::bidding::{BidOutcome, BidResult, Contract};
use crate::domain::meld::MeldTable;
use crate::domain::passing::{exchange_with, Exchange, PassCards};
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::scoring::{partnership_meld, RoundResult};
use crate::domain::state::{Phase, RoundState, Seat};
use crate::domain::tricks::{play_card, PlayCardResult, TrickProgress};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

fn phase_error(state: &RoundState, expected: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::PhaseMismatch,
        format!("expected {expected} phase, round is in {:?}", state.phase),
    )
}

/// Apply one bidding turn and move on once bidding ends.
pub fn apply_bid(state: &mut RoundState, seat: Seat, raw: u8) -> Result<BidResult, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(phase_error(state, "bidding"));
    }
    let result = state.bidding.place_bid(seat, raw)?;
    match result.outcome {
        Some(BidOutcome::Won { declarer, bid }) => {
            let contract = Contract::declare(declarer, bid, &state.hands[declarer as usize]);
            info!(declarer, bid, trump = ?contract.trump, "Contract won");
            state.contract = Some(contract);
            state.phase = Phase::Passing;
        }
        Some(BidOutcome::AllPassed) => {
            warn!("All seats passed; round must be redealt");
            state.phase = Phase::Terminal;
        }
        None => {}
    }
    Ok(result)
}

/// Run the partner exchange. `choose_return` picks the declarer's three cards.
pub fn apply_exchange_with<E, F>(
    state: &mut RoundState,
    pass_index: usize,
    choose_return: F,
) -> Result<Exchange, E>
where
    E: From<DomainError>,
    F: FnOnce(&[Card]) -> Result<PassCards, E>,
{
    if state.phase != Phase::Passing || state.exchange.is_some() {
        return Err(phase_error(state, "passing").into());
    }
    let contract = state.require_contract("exchange")?;
    let ex = exchange_with(&mut state.hands, contract.declarer, pass_index, choose_return)?;
    state.exchange = Some(ex);
    Ok(ex)
}

/// Fix meld and start the first trick, led by the declarer.
pub fn begin_tricks(state: &mut RoundState, table: &MeldTable) -> Result<(), DomainError> {
    if state.phase != Phase::Passing || state.exchange.is_none() {
        return Err(phase_error(state, "completed passing"));
    }
    let contract = state.require_contract("begin tricks")?;
    if let Some(seat) = state.hands.iter().position(|h| h.len() != HAND_SIZE) {
        return Err(DomainError::invariant(format!(
            "seat {seat} holds {} cards before trick play",
            state.hands[seat].len()
        )));
    }

    state.meld = partnership_meld(&state.hands, table);
    state.tricks = Some(TrickProgress::new(contract));
    state.phase = Phase::Trick { trick_no: 0 };
    info!(
        declarer = contract.declarer,
        meld_ns = state.meld[0],
        meld_ew = state.meld[1],
        "Trick play started"
    );
    Ok(())
}

/// Play one card and keep the phase in step with trick progress.
pub fn apply_play(
    state: &mut RoundState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if !matches!(state.phase, Phase::Trick { .. }) {
        return Err(phase_error(state, "trick"));
    }
    let RoundState { hands, tricks, .. } = state;
    let progress = tricks
        .as_mut()
        .ok_or_else(|| DomainError::invariant("trick phase without trick progress"))?;
    let result = play_card(hands, progress, seat, card)?;

    state.phase = match &state.tricks {
        Some(p) if p.completed => Phase::Terminal,
        Some(p) => Phase::Trick {
            trick_no: p.current.trick_no,
        },
        None => return Err(DomainError::invariant("trick progress vanished")),
    };
    Ok(result)
}

/// Score a finished round.
pub fn finish(state: &RoundState) -> Result<RoundResult, DomainError> {
    let progress = match (&state.phase, &state.tricks) {
        (Phase::Terminal, Some(p)) if p.completed => p,
        _ => return Err(phase_error(state, "completed trick")),
    };
    let contract = state.require_contract("finish")?;
    let played = progress.plays.len();
    if played != PLAYERS * HAND_SIZE {
        return Err(DomainError::invariant(format!(
            "round finished after {played} plays"
        )));
    }

    let result = RoundResult::new(contract, state.meld, progress.trick_points);
    info!(
        declarer = contract.declarer,
        bid = contract.bid,
        totals = ?result.totals,
        contract_met = result.contract_met,
        "Round scored"
    );
    Ok(result)
}
