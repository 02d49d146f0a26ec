//! Utility Interpreter Interface
//!
//! External, non-function commands (`ls`, `echo`, `test`, ...) are not
//! built into this crate (spec §1 Non-goals); instead `ICallUtility` is
//! dispatched through an injected [`UtilityInterpreter`], mirroring the
//! teacher's `CommandExecutor` trait for built-in/external command
//! dispatch.
//!
//! Implementors must satisfy the invariant from spec §6.2: running a
//! utility against a state whose stdout is empty, then against a state
//! whose stdout is some arbitrary `prefix`, must produce outputs that
//! differ only by `prefix` being prepended/continued — a utility may
//! never inspect or branch on prior stdout content. This lets
//! [`crate::buffer::Stdout::concat`] be used safely to stitch the two
//! together.

use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::ident::Identifier;
use crate::state::{Outcome, State};

/// Injected interpreter for non-function utility calls.
pub trait UtilityInterpreter<B: ConstraintBackend> {
    /// Evaluate utility `name` called with `arguments` against `state`
    /// and `context`, given the calling `input`. Returns the four-way
    /// `Outcome` partition exactly like evaluating an `Instruction`
    /// would; an unknown utility name is expected to be reported as a
    /// `failure` state, not a Rust-level panic or `Err`. Implementors
    /// update `context.result` to reflect success/failure but otherwise
    /// leave the context untouched, since utilities (unlike functions)
    /// never see or mutate the caller's variable environment.
    fn call(
        &self,
        name: &Identifier,
        arguments: &[String],
        state: &State<B>,
        context: &Context,
        input: &Input,
    ) -> Outcome<B>;
}
