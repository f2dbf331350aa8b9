//! Unique names for scratch files and directories.

use ulid::Ulid;

/// `{prefix}-{ulid}`, distinct across calls and test runs.
///
/// ```
/// use engine_test_support::unique::unique_str;
///
/// let a = unique_str("out");
/// assert_ne!(a, unique_str("out"));
/// assert!(a.starts_with("out-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}
