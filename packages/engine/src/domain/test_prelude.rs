use std::env;

use proptest::prelude::ProptestConfig;

/// Case count is tunable through `PROPTEST_CASES`; low default keeps CI fast.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
