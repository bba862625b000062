//! `PinochleEnv`: reset/step/render over one round at a time.
//!
//! Bidding steps take a raw bid (0 passes, values above 50 are clamped).
//! A passing step takes an index into the 220 three-card subsets of the
//! passer's sorted hand. A trick step ignores its action and plays the round
//! out with role strategies, returning the final reward.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::{BidView, PassView, PlayView, RoleStrategies, SeatRole, StrategyOptions};
use crate::config::EngineConfig;
use crate::domain::bidding::Contract;
use crate::domain::dealing::deal_hands;
use crate::domain::lookahead::{evaluate_passes, monte_carlo, Estimate};
use crate::domain::passing::{default_return, PassCards};
use crate::domain::rules::{bid_action_range, PASS_SUBSETS};
use crate::domain::round_flow::{apply_bid, apply_exchange_with, apply_play, begin_tricks, finish};
use crate::domain::scoring::{primary_reward, RoundResult};
use crate::domain::seed_derivation::{
    derive_dealing_seed, derive_lookahead_seed, derive_strategy_seed,
};
use crate::domain::state::{partner_of, Partnership, Phase, RoundState, Seat};
use crate::domain::tricks::TrickProgress;
use crate::env::{EnvError, Observation};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat controlled by the external agent.
pub const AGENT_SEAT: Seat = 0;

/// Regret bookkeeping for a passing step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassSummary {
    pub chosen_index: usize,
    pub chosen_total: u32,
    pub best_index: usize,
    pub best_total: u32,
}

/// Diagnostics accompanying a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepInfo {
    /// The previous round ended with four passes and a new one was dealt.
    pub redeal: bool,
    pub round_no: u64,
    pub bid_history: Vec<(Seat, u8)>,
    pub contract: Option<Contract>,
    pub passed: Option<PassCards>,
    pub returned: Option<PassCards>,
    pub pass: Option<PassSummary>,
    pub result: Option<RoundResult>,
    pub estimate: Option<Estimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

pub struct PinochleEnv {
    config: EngineConfig,
    episode_seed: u64,
    round_no: u64,
    strategies: RoleStrategies,
    state: RoundState,
}

impl PinochleEnv {
    /// Build an environment and deal its first round.
    pub fn new(config: EngineConfig) -> Result<Self, EnvError> {
        config.validate()?;
        let episode_seed = match config.seed {
            Some(seed) => seed,
            None => StdRng::from_os_rng().random(),
        };
        let options = StrategyOptions {
            seed: None,
            bid_threshold: config.heuristic_bid_threshold,
        };
        let strategies = RoleStrategies::from_names(&config.strategies, options, |role| {
            Some(derive_strategy_seed(episode_seed, 0, role.index() as u8))
        })?;

        let state = Self::deal(episode_seed, 0)?;
        let mut env = Self {
            config,
            episode_seed,
            round_no: 0,
            strategies,
            state,
        };
        env.advance_bidding()?;
        Ok(env)
    }

    /// Replace the seat strategies, e.g. with test doubles.
    pub fn with_strategies(mut self, strategies: RoleStrategies) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn episode_seed(&self) -> u64 {
        self.episode_seed
    }

    pub fn round_no(&self) -> u64 {
        self.round_no
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn observation(&self) -> Observation {
        Observation::for_round(&self.state, AGENT_SEAT)
    }

    /// Number of distinct raw actions meaningful in the current phase.
    pub fn action_space(&self) -> usize {
        match self.state.phase {
            Phase::Bidding => bid_action_range().count(),
            Phase::Passing => PASS_SUBSETS,
            Phase::Trick { .. } => 1,
            Phase::Terminal => 0,
        }
    }

    /// Deal the next round and advance other seats to the agent's first bid.
    pub fn reset(&mut self) -> Result<Observation, EnvError> {
        self.round_no += 1;
        self.state = Self::deal(self.episode_seed, self.round_no)?;
        self.advance_bidding()?;
        info!(round_no = self.round_no, "Round dealt");
        Ok(self.observation())
    }

    pub fn step(&mut self, action: usize) -> Result<StepOutcome, EnvError> {
        match self.state.phase {
            Phase::Bidding => self.step_bidding(action),
            Phase::Passing => self.step_passing(action),
            Phase::Trick { .. } => self.step_trick(),
            Phase::Terminal => Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "round is over; call reset",
            )
            .into()),
        }
    }

    /// Human-readable summary of the round.
    pub fn render(&self) -> String {
        format!("Round {}\n{}", self.round_no, self.state)
    }

    fn deal(episode_seed: u64, round_no: u64) -> Result<RoundState, EnvError> {
        let hands = deal_hands(derive_dealing_seed(episode_seed, round_no))?;
        Ok(RoundState::new(hands))
    }

    fn agent_side() -> Partnership {
        Partnership::of(AGENT_SEAT)
    }

    fn info(&self) -> StepInfo {
        StepInfo {
            round_no: self.round_no,
            bid_history: self.state.bidding.history.clone(),
            contract: self.state.contract,
            passed: self.state.exchange.map(|e| e.passed),
            returned: self.state.exchange.map(|e| e.returned),
            ..StepInfo::default()
        }
    }

    fn outcome(&self, reward: f64, done: bool, info: StepInfo) -> StepOutcome {
        StepOutcome {
            observation: self.observation(),
            reward,
            done,
            info,
        }
    }

    fn step_bidding(&mut self, action: usize) -> Result<StepOutcome, EnvError> {
        let raw = u8::try_from(action).unwrap_or(u8::MAX);
        apply_bid(&mut self.state, AGENT_SEAT, raw)?;
        self.advance_bidding()?;

        match self.state.phase {
            Phase::Bidding => Ok(self.outcome(0.0, false, self.info())),
            Phase::Terminal => {
                let mut info = self.info();
                info.redeal = true;
                warn!(round_no = self.round_no, "All seats passed, redealing");
                self.reset()?;
                info.round_no = self.round_no;
                Ok(self.outcome(0.0, false, info))
            }
            Phase::Passing => {
                let contract = self.state.require_contract("bidding won")?;
                if contract.partnership != Self::agent_side() {
                    self.run_strategy_exchange(contract)?;
                }
                Ok(self.outcome(0.0, false, self.info()))
            }
            Phase::Trick { .. } => Err(DomainError::invariant("bidding jumped to trick play").into()),
        }
    }

    fn step_passing(&mut self, action: usize) -> Result<StepOutcome, EnvError> {
        let contract = self.state.require_contract("passing")?;
        if contract.partnership != Self::agent_side() {
            return Err(DomainError::invariant("agent asked to pass for the opponents").into());
        }

        let evaluation = evaluate_passes(
            &self.state.hands,
            &TrickProgress::new(contract),
            &self.config.meld_table,
        )?;
        let index = action % PASS_SUBSETS;
        let reward = evaluation.regret(index);

        // The agent picks the pass; the declarer's return follows its role.
        if contract.declarer == AGENT_SEAT {
            apply_exchange_with::<EnvError, _>(&mut self.state, index, |hand| {
                Ok(default_return(hand)?)
            })?;
        } else {
            let strategy = self.strategies.for_role(SeatRole::ContractHolder);
            apply_exchange_with::<EnvError, _>(&mut self.state, index, |hand| {
                let view = PassView {
                    seat: contract.declarer,
                    hand,
                    contract: &contract,
                };
                Ok(strategy.choose_return(&view)?)
            })?;
        }
        begin_tricks(&mut self.state, &self.config.meld_table)?;

        let mut info = self.info();
        info.pass = Some(PassSummary {
            chosen_index: index,
            chosen_total: evaluation.totals[index],
            best_index: evaluation.best_index,
            best_total: evaluation.best_total,
        });
        debug!(index, reward, best = evaluation.best_index, "Agent pass");
        Ok(self.outcome(reward, false, info))
    }

    fn step_trick(&mut self) -> Result<StepOutcome, EnvError> {
        let contract = self.state.require_contract("trick play")?;
        let estimate = {
            let progress = self
                .state
                .tricks
                .as_ref()
                .ok_or_else(|| DomainError::invariant("trick phase without trick progress"))?;
            monte_carlo(
                &self.state.hands,
                progress,
                self.config.lookahead_playouts,
                derive_lookahead_seed(self.episode_seed, self.round_no),
            )?
        };

        self.play_out_round(contract)?;
        let result = finish(&self.state)?;

        let side = Self::agent_side();
        let primary = primary_reward(&result, side, self.config.bid_reward);
        let signed = if contract.partnership == side {
            estimate.mean
        } else {
            -estimate.mean
        };
        let reward = primary + self.config.shaping_weight * signed;
        info!(
            round_no = self.round_no,
            primary,
            shaping = signed,
            reward,
            "Round finished"
        );

        let mut info = self.info();
        info.result = Some(result);
        info.estimate = Some(estimate);
        Ok(self.outcome(reward, true, info))
    }

    /// Let strategies bid until the agent must act or bidding ends.
    fn advance_bidding(&mut self) -> Result<(), EnvError> {
        while self.state.phase == Phase::Bidding && self.state.bidding.turn != AGENT_SEAT {
            let seat = self.state.bidding.turn;
            let view = BidView {
                seat,
                hand: &self.state.hands[seat as usize],
                bidding: &self.state.bidding,
                meld_table: &self.config.meld_table,
            };
            let raw = self
                .strategies
                .for_seat(seat, AGENT_SEAT)
                .choose_bid(&view)?;
            apply_bid(&mut self.state, seat, raw)?;
        }
        Ok(())
    }

    /// Exchange for an opponent contract, entirely by strategies.
    fn run_strategy_exchange(&mut self, contract: Contract) -> Result<(), EnvError> {
        let passer = partner_of(contract.declarer);
        let index = {
            let view = PassView {
                seat: passer,
                hand: &self.state.hands[passer as usize],
                contract: &contract,
            };
            self.strategies
                .for_role(SeatRole::Partner)
                .choose_pass(&view)?
        };
        let holder = self.strategies.for_role(SeatRole::ContractHolder);
        apply_exchange_with::<EnvError, _>(&mut self.state, index, |hand| {
            let view = PassView {
                seat: contract.declarer,
                hand,
                contract: &contract,
            };
            Ok(holder.choose_return(&view)?)
        })?;
        begin_tricks(&mut self.state, &self.config.meld_table)?;
        Ok(())
    }

    fn play_out_round(&mut self, contract: Contract) -> Result<(), EnvError> {
        while self.state.phase != Phase::Terminal {
            let (seat, card) = {
                let progress = self
                    .state
                    .tricks
                    .as_ref()
                    .ok_or_else(|| DomainError::invariant("trick phase without trick progress"))?;
                let seat = progress.current.to_act();
                let view = PlayView {
                    seat,
                    hand: &self.state.hands[seat as usize],
                    trick: &progress.current,
                };
                let card = self
                    .strategies
                    .for_seat(seat, contract.declarer)
                    .choose_play(&view)?;
                (seat, card)
            };
            apply_play(&mut self.state, seat, card)?;
        }
        Ok(())
    }
}
