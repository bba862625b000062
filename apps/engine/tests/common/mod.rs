#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use pinochle_engine::ai::{AiError, BidView, PassView, PlayView, RoleStrategies, Strategy};
use pinochle_engine::domain::passing::PassCards;
use pinochle_engine::domain::Card;
use pinochle_engine::{EngineConfig, PinochleEnv, StepOutcome};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Config with a fixed seed and a small playout count.
pub fn seeded_config(seed: u64) -> EngineConfig {
    EngineConfig {
        seed: Some(seed),
        lookahead_playouts: 4,
        ..EngineConfig::default()
    }
}

pub fn seeded_env(seed: u64) -> PinochleEnv {
    PinochleEnv::new(seeded_config(seed)).expect("env builds from a valid config")
}

/// Step with `action` until the round finishes, collecting every outcome.
pub fn run_round(env: &mut PinochleEnv, action: usize) -> Vec<StepOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..200 {
        let out = env.step(action).expect("step succeeds");
        let done = out.done;
        outcomes.push(out);
        if done {
            return outcomes;
        }
    }
    panic!("round did not finish within 200 steps");
}

/// The three highest cards by (rank, suit), highest first.
pub fn highest_three(hand: &[Card]) -> PassCards {
    let mut cards = hand.to_vec();
    cards.sort_by_key(|c| std::cmp::Reverse((c.rank, c.suit)));
    [cards[0], cards[1], cards[2]]
}

/// Fixed-answer strategy: always the same bid and pass index, returns its
/// highest three cards, plays the first legal card.
pub struct Scripted {
    pub bid: u8,
    pub pass_index: usize,
}

impl Strategy for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn choose_bid(&self, _view: &BidView<'_>) -> Result<u8, AiError> {
        Ok(self.bid)
    }

    fn choose_pass(&self, _view: &PassView<'_>) -> Result<usize, AiError> {
        Ok(self.pass_index)
    }

    fn choose_return(&self, view: &PassView<'_>) -> Result<PassCards, AiError> {
        Ok(highest_three(view.hand))
    }

    fn choose_play(&self, view: &PlayView<'_>) -> Result<Card, AiError> {
        view.legal_plays()
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal play".into()))
    }
}

/// Seeded env whose holder, partner and opponent seats bid the given values.
pub fn scripted_env(seed: u64, holder_bid: u8, partner_bid: u8, opponent_bid: u8) -> PinochleEnv {
    let scripted = |bid| -> Box<dyn Strategy> {
        Box::new(Scripted {
            bid,
            pass_index: 5,
        })
    };
    seeded_env(seed).with_strategies(RoleStrategies::new(
        scripted(holder_bid),
        scripted(partner_bid),
        scripted(opponent_bid),
    ))
}
