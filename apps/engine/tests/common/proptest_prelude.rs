// Proptest prelude shared by the integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 8 here; full rounds
//   with lookahead are comparatively slow).

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..base
    }
}
