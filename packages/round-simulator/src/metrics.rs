//! Per-episode records written by the simulator.

use pinochle_engine::domain::bidding::Contract;
use pinochle_engine::domain::lookahead::Estimate;
use pinochle_engine::domain::scoring::RoundResult;
use pinochle_engine::domain::Partnership;
use pinochle_engine::StepOutcome;
use serde::Serialize;

/// One finished round as seen by the agent.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeMetrics {
    pub episode: u32,
    pub seed: u64,
    pub timestamp: String,
    pub agent: String,
    pub redeals: u32,
    pub steps: u32,
    pub bid_history: Vec<(u8, u8)>,
    pub contract: Option<Contract>,
    pub agent_declared: bool,
    pub pass_regret: Option<f64>,
    pub result: Option<RoundResult>,
    pub estimate: Option<Estimate>,
    pub total_reward: f64,
    pub final_reward: f64,
    pub duration_ms: f64,
}

/// Flat CSV row for one episode.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub episode: u32,
    pub seed: u64,
    pub declarer: Option<u8>,
    pub bid: Option<u8>,
    pub trump: Option<String>,
    pub meld_ns: Option<u32>,
    pub meld_ew: Option<u32>,
    pub tricks_ns: Option<u8>,
    pub tricks_ew: Option<u8>,
    pub contract_met: Option<bool>,
    pub redeals: u32,
    pub reward: f64,
}

impl From<&EpisodeMetrics> for CsvSummaryRow {
    fn from(m: &EpisodeMetrics) -> Self {
        let result = m.result.as_ref();
        Self {
            episode: m.episode,
            seed: m.seed,
            declarer: m.contract.map(|c| c.declarer),
            bid: m.contract.map(|c| c.bid),
            trump: m.contract.map(|c| format!("{:?}", c.trump)),
            meld_ns: result.map(|r| r.meld[0]),
            meld_ew: result.map(|r| r.meld[1]),
            tricks_ns: result.map(|r| r.trick_points[0]),
            tricks_ew: result.map(|r| r.trick_points[1]),
            contract_met: result.map(|r| r.contract_met),
            redeals: m.redeals,
            reward: m.total_reward,
        }
    }
}

/// Raw meld of one deal: per seat, per team, whole table.
#[derive(Debug, Clone, Serialize)]
pub struct MeldRow {
    pub deal: u32,
    pub seat0: u32,
    pub seat1: u32,
    pub seat2: u32,
    pub seat3: u32,
    pub team_ns: u32,
    pub team_ew: u32,
    pub all: u32,
}

impl MeldRow {
    pub fn new(deal: u32, seats: [u32; 4]) -> Self {
        Self {
            deal,
            seat0: seats[0],
            seat1: seats[1],
            seat2: seats[2],
            seat3: seats[3],
            team_ns: seats[0] + seats[2],
            team_ew: seats[1] + seats[3],
            all: seats.iter().sum(),
        }
    }
}

/// Fold the step outcomes of one episode into a record.
pub fn build_episode_metrics(
    episode: u32,
    seed: u64,
    agent: &str,
    outcomes: &[StepOutcome],
    duration_ms: f64,
) -> EpisodeMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());
    let last = outcomes.last();
    let info = last.map(|o| &o.info);
    let contract = info.and_then(|i| i.contract);
    let agent_side = Partnership::of(pinochle_engine::env::AGENT_SEAT);

    EpisodeMetrics {
        episode,
        seed,
        timestamp,
        agent: agent.to_string(),
        redeals: outcomes.iter().filter(|o| o.info.redeal).count() as u32,
        steps: outcomes.len() as u32,
        bid_history: info.map(|i| i.bid_history.clone()).unwrap_or_default(),
        contract,
        agent_declared: contract.is_some_and(|c| c.partnership == agent_side),
        pass_regret: outcomes
            .iter()
            .find(|o| o.info.pass.is_some())
            .map(|o| o.reward),
        result: info.and_then(|i| i.result.clone()),
        estimate: info.and_then(|i| i.estimate),
        total_reward: outcomes.iter().map(|o| o.reward).sum(),
        final_reward: last.map_or(0.0, |o| o.reward),
        duration_ms,
    }
}
