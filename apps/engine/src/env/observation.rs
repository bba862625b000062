use serde::Serialize;

use crate::domain::cards_logic::count_vector;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{partner_of, Phase, RoundState, Seat};
use crate::domain::DISTINCT_CARDS;

/// Fixed-width view of a round for the external agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    /// 0 bidding, 1 passing, 2 trick, 3 terminal
    pub phase: u8,
    /// Copies held of each distinct card by the seat the observation is for.
    pub hand_counts: [u8; DISTINCT_CARDS],
    pub current_bid: u8,
    pub active: [bool; PLAYERS],
    pub turn: Seat,
}

impl Observation {
    /// Observation for the seat that acts next on behalf of `agent`: the
    /// passer during the exchange, `agent` otherwise.
    pub fn for_round(state: &RoundState, agent: Seat) -> Self {
        let (seat, turn) = match state.phase {
            Phase::Bidding => (agent, state.bidding.turn),
            Phase::Passing => {
                let passer = state.contract.map_or(agent, |c| partner_of(c.declarer));
                (passer, passer)
            }
            Phase::Trick { .. } => {
                let turn = state
                    .tricks
                    .as_ref()
                    .map_or(agent, |t| t.current.to_act());
                (agent, turn)
            }
            Phase::Terminal => (agent, agent),
        };
        Self {
            phase: state.phase.tag(),
            hand_counts: count_vector(&state.hands[seat as usize]),
            current_bid: state.bidding.current_bid,
            active: state.bidding.active,
            turn,
        }
    }

    /// Flat numeric encoding: phase, 24 counts, bid, 4 active flags, turn.
    pub fn to_vec(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(2 + DISTINCT_CARDS + PLAYERS + 1);
        out.push(f32::from(self.phase));
        out.extend(self.hand_counts.iter().map(|&c| f32::from(c)));
        out.push(f32::from(self.current_bid));
        out.extend(self.active.iter().map(|&a| if a { 1.0 } else { 0.0 }));
        out.push(f32::from(self.turn));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dealing::deal_hands;

    #[test]
    fn bidding_observation_counts_agent_hand() {
        let state = RoundState::new(deal_hands(5).unwrap());
        let obs = Observation::for_round(&state, 0);
        assert_eq!(obs.phase, 0);
        assert_eq!(obs.hand_counts.iter().map(|&c| u32::from(c)).sum::<u32>(), 12);
        assert_eq!(obs.current_bid, 20);
        assert_eq!(obs.active, [true; 4]);
        assert_eq!(obs.turn, 0);
        assert_eq!(obs.to_vec().len(), 31);
    }
}
