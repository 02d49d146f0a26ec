//! Config & Input
//!
//! `Config` carries the loop iteration bound that guarantees termination of
//! the symbolic analysis; `Input` carries the per-call `under_condition`
//! flag and `$0`. Both are small, Copy-ish value types constructed at call
//! boundaries — see spec §3.

/// Interpreter configuration.
///
/// The symbolic core requires `loop_limit = Some(_)`; a concrete
/// (non-symbolic) interpreter could leave it `None` since it never needs to
/// bound anything (it isn't exploring a branching state space). This crate
/// implements only the symbolic core, so every entry point that actually
/// runs a program validates the `Some` case itself (see
/// `crate::driver::run_program`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub loop_limit: Option<u64>,
}

impl Config {
    pub fn symbolic(loop_limit: u64) -> Self {
        Self {
            loop_limit: Some(loop_limit),
        }
    }

    pub fn concrete() -> Self {
        Self { loop_limit: None }
    }
}

/// Builder for `Config`, in the style of this codebase's other runtime
/// option builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    loop_limit: Option<u64>,
}

impl ConfigBuilder {
    pub fn loop_limit(mut self, n: u64) -> Self {
        self.loop_limit = Some(n);
        self
    }

    pub fn build(self) -> Config {
        Config {
            loop_limit: self.loop_limit,
        }
    }
}

/// Per-call evaluation input: whether we are currently under a condition
/// (so a `false` result should not escalate to `Exit`), and the current
/// `$0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub under_condition: bool,
    pub argument0: String,
}

impl Input {
    pub fn new(argument0: impl Into<String>) -> Self {
        Self {
            under_condition: false,
            argument0: argument0.into(),
        }
    }

    /// True exactly when a `false` result should escalate to `Exit` (spec
    /// §4.1: "strict" holds exactly when `under_condition = false`).
    pub fn strict(&self) -> bool {
        !self.under_condition
    }

    /// Force `under_condition = true`, used when evaluating the condition
    /// sub-instruction of `If`/`While`/`Not` and the left-hand of `Not`.
    pub fn forcing_condition(&self) -> Input {
        Input {
            under_condition: true,
            argument0: self.argument0.clone(),
        }
    }

    pub fn with_argument0(&self, argument0: impl Into<String>) -> Input {
        Input {
            under_condition: self.under_condition,
            argument0: argument0.into(),
        }
    }
}
