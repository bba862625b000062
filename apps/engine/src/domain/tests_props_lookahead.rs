//! Property tests for the lookahead estimators.

use proptest::prelude::*;

use crate::domain::lookahead::monte_carlo;
use crate::domain::test_state_helpers::trick_ready;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: same seed and playout count give the same estimate
    #[test]
    fn prop_estimate_is_reproducible(
        seed in test_gens::deal_seed(),
        mc_seed in any::<u64>(),
        k in 0usize..12,
    ) {
        let (hands, progress) = trick_ready(seed, 0);
        let a = monte_carlo(&hands, &progress, k, mc_seed).unwrap();
        let b = monte_carlo(&hands, &progress, k, mc_seed).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.samples, k);
        prop_assert!(a.mean.abs() <= 25.0);
        prop_assert!(a.variance >= 0.0);
    }
}

/// Spread of the estimate across seeds.
fn spread_of_means(k: usize) -> f64 {
    let (hands, progress) = trick_ready(4242, 1);
    let means: Vec<f64> = (0..24)
        .map(|s| monte_carlo(&hands, &progress, k, s).unwrap().mean)
        .collect();
    let n = means.len() as f64;
    let avg = means.iter().sum::<f64>() / n;
    means.iter().map(|m| (m - avg).powi(2)).sum::<f64>() / (n - 1.0)
}

#[test]
fn estimate_spread_shrinks_with_more_playouts() {
    let few = spread_of_means(1);
    let many = spread_of_means(48);
    assert!(many <= few, "spread with 48 playouts {many} above spread with 1 {few}");
}
