//! Lookahead estimators used for reward shaping.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::domain::meld::MeldTable;
use crate::domain::passing::exchange;
use crate::domain::rules::{PASS_SUBSETS, PLAYERS};
use crate::domain::simulate::{greedy_choice, play_out, random_choice};
use crate::domain::state::Partnership;
use crate::domain::tricks::TrickProgress;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Monte Carlo estimate of the trick-point differential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub mean: f64,
    /// Sample variance of the individual playouts.
    pub variance: f64,
    pub samples: usize,
}

impl Estimate {
    pub const ZERO: Estimate = Estimate {
        mean: 0.0,
        variance: 0.0,
        samples: 0,
    };

    /// Variance of the mean itself.
    pub fn variance_of_mean(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.variance / self.samples as f64
        }
    }
}

/// Run `playouts` uniform-random playouts from the given position.
///
/// Each playout scores contract side points minus defender points.
pub fn monte_carlo(
    hands: &[Vec<Card>; PLAYERS],
    progress: &TrickProgress,
    playouts: usize,
    seed: u64,
) -> Result<Estimate, DomainError> {
    if playouts == 0 {
        return Ok(Estimate::ZERO);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = progress.contract.partnership;

    let mut samples = Vec::with_capacity(playouts);
    for _ in 0..playouts {
        let done = play_out::<DomainError, _>(hands.clone(), progress.clone(), |_, _, legal| {
            random_choice(&mut rng, legal)
        })?;
        samples.push(differential(&done, side));
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = if samples.len() > 1 {
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    debug!(playouts, mean, variance, "Monte Carlo estimate");
    Ok(Estimate {
        mean,
        variance,
        samples: playouts,
    })
}

fn differential(done: &TrickProgress, side: Partnership) -> f64 {
    f64::from(done.points_for(side)) - f64::from(done.points_for(side.other()))
}

/// Contract partnership totals for every possible pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassEvaluation {
    /// First index reaching the best total.
    pub best_index: usize,
    pub best_total: u32,
    pub totals: Vec<u32>,
}

impl PassEvaluation {
    /// Shaping penalty for choosing `index`: 0 for the best pass.
    pub fn regret(&self, index: usize) -> f64 {
        let chosen = self.totals[index % PASS_SUBSETS];
        -(f64::from(self.best_total) - f64::from(chosen)).abs()
    }
}

/// Try all 220 passes with the default return and a greedy playout each.
///
/// `hands` must be the position right before the exchange.
pub fn evaluate_passes(
    hands: &[Vec<Card>; PLAYERS],
    progress: &TrickProgress,
    table: &MeldTable,
) -> Result<PassEvaluation, DomainError> {
    let contract = progress.contract;
    let side = contract.partnership;
    let mut totals = Vec::with_capacity(PASS_SUBSETS);

    for index in 0..PASS_SUBSETS {
        let mut trial = hands.clone();
        exchange(&mut trial, contract.declarer, index)?;
        let meld: u32 = side
            .seats()
            .iter()
            .map(|&s| table.evaluate(&trial[s as usize]))
            .sum();
        let done = play_out::<DomainError, _>(trial, progress.clone(), |_, trick, legal| {
            greedy_choice(trick, legal)
        })?;
        totals.push(meld + u32::from(done.points_for(side)));
    }

    let mut best_index = 0;
    for (i, &total) in totals.iter().enumerate() {
        if total > totals[best_index] {
            best_index = i;
        }
    }
    let best_total = totals[best_index];
    debug!(best_index, best_total, "Pass evaluation");
    Ok(PassEvaluation {
        best_index,
        best_total,
        totals,
    })
}
