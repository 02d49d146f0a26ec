//! Symbolic State & Outcome
//!
//! `State` bundles a filesystem with stdin/stdout; `SymbolicState` adds the
//! evaluation `Context`. `Outcome` is the four-way partition of resulting
//! symbolic states by terminating behaviour (spec §3/§4.1). Membership in
//! the `IndexSet`-backed `StateSet` is by full structural equality over
//! `(state, context)`, which is what lets branching instructions dedupe
//! converging paths for free instead of needing a bespoke canonicalisation
//! pass — see DESIGN.md for why `IndexSet` (already in this codebase's
//! dependency table) was chosen over introducing a persistent-set crate.

use indexmap::IndexSet;

use crate::buffer::{Stdin, Stdout};
use crate::constraint::{ConstraintBackend, Filesystem};
use crate::context::Context;

/// Filesystem ⊕ stdin ⊕ stdout.
pub struct State<B: ConstraintBackend> {
    pub filesystem: Filesystem<B>,
    pub stdin: Stdin,
    pub stdout: Stdout,
}

impl<B: ConstraintBackend> State<B> {
    pub fn new(filesystem: Filesystem<B>, stdin: Stdin, stdout: Stdout) -> Self {
        Self {
            filesystem,
            stdin,
            stdout,
        }
    }

    pub fn with_stdin(&self, stdin: Stdin) -> Self {
        Self {
            filesystem: self.filesystem.clone(),
            stdin,
            stdout: self.stdout.clone(),
        }
    }

    pub fn with_stdout(&self, stdout: Stdout) -> Self {
        Self {
            filesystem: self.filesystem.clone(),
            stdin: self.stdin.clone(),
            stdout,
        }
    }
}

impl<B: ConstraintBackend> Clone for State<B> {
    fn clone(&self) -> Self {
        Self {
            filesystem: self.filesystem.clone(),
            stdin: self.stdin.clone(),
            stdout: self.stdout.clone(),
        }
    }
}

impl<B: ConstraintBackend> PartialEq for State<B> {
    fn eq(&self, other: &Self) -> bool {
        self.filesystem == other.filesystem && self.stdin == other.stdin && self.stdout == other.stdout
    }
}

impl<B: ConstraintBackend> Eq for State<B> {}

impl<B: ConstraintBackend> std::hash::Hash for State<B> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.filesystem.hash(state);
        self.stdin.hash(state);
        self.stdout.hash(state);
    }
}

impl<B: ConstraintBackend> std::fmt::Debug for State<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("filesystem", &self.filesystem)
            .field("stdin", &self.stdin)
            .field("stdout", &self.stdout)
            .finish()
    }
}

/// `(state, context)` — identity by the full tuple for set membership.
pub struct SymbolicState<B: ConstraintBackend> {
    pub state: State<B>,
    pub context: Context,
}

impl<B: ConstraintBackend> SymbolicState<B> {
    pub fn new(state: State<B>, context: Context) -> Self {
        Self { state, context }
    }
}

impl<B: ConstraintBackend> Clone for SymbolicState<B> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            context: self.context.clone(),
        }
    }
}

impl<B: ConstraintBackend> PartialEq for SymbolicState<B> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.context == other.context
    }
}

impl<B: ConstraintBackend> Eq for SymbolicState<B> {}

impl<B: ConstraintBackend> std::hash::Hash for SymbolicState<B> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.state.hash(state);
        self.context.hash(state);
    }
}

impl<B: ConstraintBackend> std::fmt::Debug for SymbolicState<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolicState")
            .field("state", &self.state)
            .field("context", &self.context)
            .finish()
    }
}

pub fn singleton<B: ConstraintBackend>(state: State<B>, context: Context) -> StateSet<B> {
    let mut set = IndexSet::new();
    set.insert(SymbolicState::new(state, context));
    set
}

/// A set of symbolic states, deduplicated by structural equality.
pub type StateSet<B> = IndexSet<SymbolicState<B>>;

/// The four-way partition of reachable symbolic states by terminating
/// behaviour (spec §3 "Outcome", §4.1).
pub struct Outcome<B: ConstraintBackend> {
    pub normal: StateSet<B>,
    pub exit: StateSet<B>,
    pub return_: StateSet<B>,
    pub failure: StateSet<B>,
}

impl<B: ConstraintBackend> Outcome<B> {
    pub fn empty() -> Self {
        Self {
            normal: StateSet::new(),
            exit: StateSet::new(),
            return_: StateSet::new(),
            failure: StateSet::new(),
        }
    }

    pub fn single_normal(state: State<B>, context: Context) -> Self {
        Self {
            normal: singleton(state, context),
            ..Self::empty()
        }
    }

    pub fn single_exit(state: State<B>, context: Context) -> Self {
        Self {
            exit: singleton(state, context),
            ..Self::empty()
        }
    }

    pub fn single_return(state: State<B>, context: Context) -> Self {
        Self {
            return_: singleton(state, context),
            ..Self::empty()
        }
    }

    /// Union with `other`, bucket by bucket.
    pub fn union(mut self, other: Self) -> Self {
        self.normal.extend(other.normal);
        self.exit.extend(other.exit);
        self.return_.extend(other.return_);
        self.failure.extend(other.failure);
        self
    }
}

impl<B: ConstraintBackend> Clone for Outcome<B> {
    fn clone(&self) -> Self {
        Self {
            normal: self.normal.clone(),
            exit: self.exit.clone(),
            return_: self.return_.clone(),
            failure: self.failure.clone(),
        }
    }
}

impl<B: ConstraintBackend> std::fmt::Debug for Outcome<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outcome")
            .field("normal", &self.normal.len())
            .field("exit", &self.exit.len())
            .field("return_", &self.return_.len())
            .field("failure", &self.failure.len())
            .finish()
    }
}

/// Split a `normal` bucket by the "strict" rule (spec §4.1): under strict
/// mode (`!under_condition`), a `Normal` state whose `result` is `false` is
/// reclassified to `Exit` ("maybe-exit"). Under condition mode, nothing
/// moves.
pub fn maybe_exit<B: ConstraintBackend>(normal: StateSet<B>, strict: bool) -> (StateSet<B>, StateSet<B>) {
    if !strict {
        return (normal, StateSet::new());
    }
    let mut keep = StateSet::new();
    let mut exit = StateSet::new();
    for s in normal {
        if s.context.result {
            keep.insert(s);
        } else {
            exit.insert(s);
        }
    }
    (keep, exit)
}

/// Like [`Outcome`] but the `normal` bucket also carries a produced value
/// `T` per branch (a `String` for `eval_str`, a `Vec<String>` for
/// `eval_list`). The `exit`/`return_`/`failure` buckets never carry a value:
/// a branch that didn't complete normally has nothing to hand back to its
/// caller expression.
pub struct ValueOutcome<B: ConstraintBackend, T> {
    pub normal: Vec<(T, State<B>, Context)>,
    pub exit: StateSet<B>,
    pub return_: StateSet<B>,
    pub failure: StateSet<B>,
}

impl<B: ConstraintBackend, T> ValueOutcome<B, T> {
    pub fn empty() -> Self {
        Self {
            normal: Vec::new(),
            exit: StateSet::new(),
            return_: StateSet::new(),
            failure: StateSet::new(),
        }
    }

    pub fn single(value: T, state: State<B>, context: Context) -> Self {
        Self {
            normal: vec![(value, state, context)],
            ..Self::empty()
        }
    }

    pub fn from_outcome_bottom(outcome: Outcome<B>) -> Self {
        Self {
            normal: Vec::new(),
            exit: outcome.exit,
            return_: outcome.return_,
            failure: outcome.failure,
        }
    }

    pub fn extend(&mut self, other: Self) {
        self.normal.extend(other.normal);
        self.exit.extend(other.exit);
        self.return_.extend(other.return_);
        self.failure.extend(other.failure);
    }

    /// Discard the produced values, keeping only the four-way state
    /// partition. Used when an expression's value has already been
    /// consumed and only the resulting states matter from here on.
    pub fn discard_values(self) -> Outcome<B> {
        let mut normal = StateSet::new();
        for (_, state, context) in self.normal {
            normal.insert(SymbolicState::new(state, context));
        }
        Outcome {
            normal,
            exit: self.exit,
            return_: self.return_,
            failure: self.failure,
        }
    }
}
