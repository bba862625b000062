use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Contract;
use crate::domain::meld::MeldTable;
use crate::domain::rules::PLAYERS;
use crate::domain::state::Partnership;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Final accounting of one played round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub contract: Contract,
    /// Meld per partnership, from the hands held when trick play began.
    pub meld: [u32; 2],
    pub trick_points: [u8; 2],
    pub totals: [u32; 2],
    pub contract_met: bool,
}

impl RoundResult {
    pub fn new(contract: Contract, meld: [u32; 2], trick_points: [u8; 2]) -> Self {
        let totals = [
            meld[0] + u32::from(trick_points[0]),
            meld[1] + u32::from(trick_points[1]),
        ];
        let contract_met = totals[contract.partnership.index()] >= u32::from(contract.bid);
        Self {
            contract,
            meld,
            trick_points,
            totals,
            contract_met,
        }
    }

    pub fn total_for(&self, side: Partnership) -> u32 {
        self.totals[side.index()]
    }

    /// Trick points of `side` minus the other side's.
    pub fn trick_differential(&self, side: Partnership) -> i32 {
        i32::from(self.trick_points[side.index()]) - i32::from(self.trick_points[side.other().index()])
    }
}

/// Meld of both partners' hands for each partnership.
pub fn partnership_meld(hands: &[Vec<Card>; PLAYERS], table: &MeldTable) -> [u32; 2] {
    let mut meld = [0u32; 2];
    for (seat, hand) in hands.iter().enumerate() {
        meld[Partnership::of(seat as u8).index()] += table.evaluate(hand);
    }
    meld
}

/// Bid value used in the agent's reward.
///
/// Contract success is always judged against the real bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidRewardPolicy {
    /// The winning bid as accepted.
    #[default]
    Accumulated,
    /// A constant value regardless of the winning bid.
    Fixed(u8),
}

impl BidRewardPolicy {
    pub fn bid_value(self, bid: u8) -> f64 {
        match self {
            BidRewardPolicy::Accumulated => f64::from(bid),
            BidRewardPolicy::Fixed(n) => f64::from(n),
        }
    }
}

impl fmt::Display for BidRewardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidRewardPolicy::Accumulated => f.write_str("accumulated"),
            BidRewardPolicy::Fixed(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for BidRewardPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("accumulated") {
            return Ok(BidRewardPolicy::Accumulated);
        }
        s.parse::<u8>().map(BidRewardPolicy::Fixed).map_err(|_| {
            DomainError::validation_other(format!(
                "bid reward policy must be 'accumulated' or an integer, got '{s}'"
            ))
        })
    }
}

/// Unshaped reward for the agent's partnership.
///
/// Declaring side: trick differential plus the bid value when the contract is
/// met, minus the bid value otherwise. Defending side: its round total.
pub fn primary_reward(result: &RoundResult, agent_side: Partnership, policy: BidRewardPolicy) -> f64 {
    if result.contract.partnership == agent_side {
        let bid_value = policy.bid_value(result.contract.bid);
        if result.contract_met {
            f64::from(result.trick_differential(agent_side)) + bid_value
        } else {
            -bid_value
        }
    } else {
        f64::from(result.total_for(agent_side))
    }
}
