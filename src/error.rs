//! Error types for the B-tree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the B-tree crate.
///
/// The surface is deliberately small: absent keys are reported through
/// `Option`/`bool` return values, not errors. Only bad construction
/// arguments and structural corruption detected by [`validate`] surface
/// here.
///
/// Corruption detected *during* an operation (a missing child where one is
/// expected, an out-of-range descent index) panics instead: a malformed
/// tree means the algorithm itself is buggy, and continuing would only
/// spread the damage.
///
/// [`validate`]: crate::BTree::validate
#[derive(Debug, Error)]
pub enum Error {
    /// Construction with a minimum degree below 2.
    ///
    /// A minimum degree of 1 would allow zero-key non-root nodes, which
    /// breaks the occupancy bounds the algorithm relies on.
    #[error("minimum degree must be at least 2, got {0}")]
    InvalidMinDegree(usize),

    /// A structural invariant does not hold.
    ///
    /// Produced by [`validate`](crate::BTree::validate) when a node is
    /// over- or under-full, keys are out of order, children counts are
    /// wrong, or leaves sit at different depths. Indicates a bug in the
    /// tree code, not a caller mistake.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMinDegree(1);
        assert_eq!(format!("{}", err), "minimum degree must be at least 2, got 1");

        let err = Error::InvariantViolation("node has 9 keys, max is 5".into());
        assert_eq!(
            format!("{}", err),
            "invariant violation: node has 9 keys, max is 5"
        );
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
