//! Error Types
//!
//! Typed, `thiserror`-derived errors for the parts of this crate that can
//! fail outside the symbolic evaluation itself (configuration, program
//! construction). The evaluator itself never returns `Result`: every
//! evaluation outcome, including failure, is represented as a branch of
//! `Outcome` (spec §4), not as a Rust `Err`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbolic execution requires a loop_limit, got None")]
    MissingLoopLimit,

    #[error("loop_limit must be greater than zero")]
    ZeroLoopLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::MissingLoopLimit.to_string(),
            "symbolic execution requires a loop_limit, got None"
        );
    }
}
