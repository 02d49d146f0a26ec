//! A trivial constraint backend that never rejects anything.
//!
//! This is a test/demo double, not the real tree-automaton solver spec §1
//! explicitly excludes from this crate's scope. It satisfies the
//! `ConstraintBackend` interface well enough to drive the CLI harness and
//! the interpreter's own unit tests: `sat` always returns `true`, and
//! `fresh_variable` just increments a counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::ConstraintBackend;

#[derive(Debug, Clone)]
pub struct NullBackend {
    counter: Arc<AtomicU64>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for NullBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintBackend for NullBackend {
    type Variable = u64;
    type Clause = ();
    type Feature = ();
    type Path = String;

    fn empty_clause(&self) -> Self::Clause {}

    fn fresh_variable(&mut self) -> Self::Variable {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    fn sat(&self, _clause: &Self::Clause) -> bool {
        true
    }
}
