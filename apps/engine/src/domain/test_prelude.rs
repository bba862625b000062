// Shared proptest configuration for domain property tests.
//
// PROPTEST_CASES overrides the number of cases (default 32).

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    ProptestConfig {
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}
