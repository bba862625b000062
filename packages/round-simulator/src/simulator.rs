//! Drives the environment with a simple agent, and samples meld per deal.

use pinochle_engine::ai::{BidView, Heuristic, PassView, Strategy};
use pinochle_engine::domain::dealing::deal_hands;
use pinochle_engine::domain::meld::MeldTable;
use pinochle_engine::domain::rules::{BID_CEILING, PASS_SUBSETS};
use pinochle_engine::domain::seed_derivation::derive_dealing_seed;
use pinochle_engine::domain::state::{partner_of, Phase};
use pinochle_engine::env::AGENT_SEAT;
use pinochle_engine::{DomainError, EnvError, PinochleEnv, StepOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::metrics::MeldRow;
use crate::types::AgentKind;

/// Upper bound on steps per episode (redeals included).
const MAX_STEPS: u32 = 500;

/// Chooses raw actions for the agent's seat.
pub struct Agent {
    kind: AgentKind,
    rng: StdRng,
    heuristic: Heuristic,
}

impl Agent {
    pub fn new(kind: AgentKind, seed: u64) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
            heuristic: Heuristic::new(Some(seed)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            AgentKind::Random => "random",
            AgentKind::Heuristic => Heuristic::NAME,
        }
    }

    pub fn act(&mut self, env: &PinochleEnv) -> Result<usize, EnvError> {
        let state = env.state();
        match (self.kind, state.phase) {
            (_, Phase::Trick { .. }) | (_, Phase::Terminal) => Ok(0),
            (AgentKind::Random, Phase::Bidding) => {
                Ok(self.rng.random_range(0..=usize::from(BID_CEILING)))
            }
            (AgentKind::Random, Phase::Passing) => Ok(self.rng.random_range(0..PASS_SUBSETS)),
            (AgentKind::Heuristic, Phase::Bidding) => {
                let view = BidView {
                    seat: AGENT_SEAT,
                    hand: &state.hands[AGENT_SEAT as usize],
                    bidding: &state.bidding,
                    meld_table: &env.config().meld_table,
                };
                Ok(usize::from(self.heuristic.choose_bid(&view)?))
            }
            (AgentKind::Heuristic, Phase::Passing) => {
                let contract = state.require_contract("agent pass")?;
                let passer = partner_of(contract.declarer);
                let view = PassView {
                    seat: passer,
                    hand: &state.hands[passer as usize],
                    contract: &contract,
                };
                Ok(self.heuristic.choose_pass(&view)?)
            }
        }
    }
}

/// Play one round to completion, returning every step outcome.
pub fn run_episode(env: &mut PinochleEnv, agent: &mut Agent) -> Result<Vec<StepOutcome>, EnvError> {
    let mut outcomes = Vec::new();
    for _ in 0..MAX_STEPS {
        let action = agent.act(env)?;
        let out = env.step(action)?;
        let done = out.done;
        outcomes.push(out);
        if done {
            return Ok(outcomes);
        }
    }
    Err(DomainError::invariant(format!("episode exceeded {MAX_STEPS} steps")).into())
}

/// Raw meld of every seat for deal number `deal`.
pub fn meld_sample(seed: u64, deal: u32, table: &MeldTable) -> Result<MeldRow, DomainError> {
    let hands = deal_hands(derive_dealing_seed(seed, u64::from(deal)))?;
    let seats = [
        table.evaluate(&hands[0]),
        table.evaluate(&hands[1]),
        table.evaluate(&hands[2]),
        table.evaluate(&hands[3]),
    ];
    Ok(MeldRow::new(deal, seats))
}
