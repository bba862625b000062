//! RNG seed derivation utilities for deterministic rounds.
//!
//! One episode seed drives everything random in a round. Each concern
//! (dealing, seat strategies, lookahead playouts) gets its own derived seed so
//! that, for example, changing the number of playouts never changes the deal.

/// Derive a seed for dealing the hands of round `round_no`.
pub fn derive_dealing_seed(episode_seed: u64, round_no: u64) -> u64 {
    mix(episode_seed, round_no, 1)
}

/// Derive a seed for the strategy occupying `seat` during round `round_no`.
pub fn derive_strategy_seed(episode_seed: u64, round_no: u64, seat: u8) -> u64 {
    mix(episode_seed, round_no, 0x100 + seat as u64)
}

/// Derive a seed for the Monte Carlo playouts of round `round_no`.
pub fn derive_lookahead_seed(episode_seed: u64, round_no: u64) -> u64 {
    mix(episode_seed, round_no, 2)
}

// SplitMix64 finalizer over the combined inputs.
fn mix(base: u64, round_no: u64, context: u64) -> u64 {
    let mut z = base
        .wrapping_add(round_no.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(context.wrapping_mul(0xD1B5_4A32_D192_ED03));
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
