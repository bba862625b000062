//! Role-based strategy assignment for the seats the agent does not control.

use serde::{Deserialize, Serialize};

use crate::ai::registry::{by_name, StrategyOptions};
use crate::ai::{AiError, Strategy};
use crate::domain::state::{partner_of, Seat};

/// A seat's role relative to an anchor seat: the declarer once a contract
/// exists, the agent's seat before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatRole {
    ContractHolder,
    Partner,
    Opponent,
}

impl SeatRole {
    pub const ALL: [SeatRole; 3] = [
        SeatRole::ContractHolder,
        SeatRole::Partner,
        SeatRole::Opponent,
    ];

    pub fn resolve(seat: Seat, anchor: Seat) -> Self {
        if seat == anchor {
            SeatRole::ContractHolder
        } else if seat == partner_of(anchor) {
            SeatRole::Partner
        } else {
            SeatRole::Opponent
        }
    }

    pub const fn index(self) -> usize {
        match self {
            SeatRole::ContractHolder => 0,
            SeatRole::Partner => 1,
            SeatRole::Opponent => 2,
        }
    }
}

/// Registry names chosen for each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleNames {
    pub holder: String,
    pub partner: String,
    pub opponent: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            holder: "heuristic".into(),
            partner: "heuristic".into(),
            opponent: "heuristic".into(),
        }
    }
}

impl RoleNames {
    pub fn name_for(&self, role: SeatRole) -> &str {
        match role {
            SeatRole::ContractHolder => &self.holder,
            SeatRole::Partner => &self.partner,
            SeatRole::Opponent => &self.opponent,
        }
    }
}

/// One strategy per role.
pub struct RoleStrategies {
    by_role: [Box<dyn Strategy>; 3],
}

impl RoleStrategies {
    pub fn new(
        holder: Box<dyn Strategy>,
        partner: Box<dyn Strategy>,
        opponent: Box<dyn Strategy>,
    ) -> Self {
        Self {
            by_role: [holder, partner, opponent],
        }
    }

    /// Build from registry names. `seed_for` supplies each role's seed.
    pub fn from_names(
        names: &RoleNames,
        base: StrategyOptions,
        seed_for: impl Fn(SeatRole) -> Option<u64>,
    ) -> Result<Self, AiError> {
        let build = |role: SeatRole| -> Result<Box<dyn Strategy>, AiError> {
            let name = names.name_for(role);
            let factory = by_name(name)
                .ok_or_else(|| AiError::Internal(format!("unknown strategy '{name}'")))?;
            let options = StrategyOptions {
                seed: seed_for(role),
                ..base
            };
            Ok((factory.make)(&options))
        };
        Ok(Self::new(
            build(SeatRole::ContractHolder)?,
            build(SeatRole::Partner)?,
            build(SeatRole::Opponent)?,
        ))
    }

    pub fn for_role(&self, role: SeatRole) -> &dyn Strategy {
        self.by_role[role.index()].as_ref()
    }

    pub fn for_seat(&self, seat: Seat, anchor: Seat) -> &dyn Strategy {
        self.for_role(SeatRole::resolve(seat, anchor))
    }
}
