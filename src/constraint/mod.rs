//! Constraint Backend Interface
//!
//! The symbolic filesystem constraint solver (tree-automaton feature
//! constraints) is out of scope for this crate — see spec §1/§6.3. This
//! module only defines the opaque interface the interpreter core threads
//! through without ever inspecting: `Variable`, `Clause`, `Feature`, `Path`,
//! plus `empty_clause`/`fresh_variable`/`sat`. The core never calls these
//! methods itself; they exist for the external collaborator (the real
//! solver, or a test double like [`null::NullBackend`]) that actually
//! builds and satisfiability-checks filesystem clauses.

pub mod null;

/// An injected constraint-solving backend.
///
/// Implementors own their own fresh-variable counter and must be reentrant
/// within a single interpreter run (spec §5).
pub trait ConstraintBackend: Clone {
    type Variable: Clone + Eq + std::hash::Hash + std::fmt::Debug + Ord;
    type Clause: Clone + Eq + std::hash::Hash + std::fmt::Debug;
    type Feature: Clone + Eq + std::hash::Hash + std::fmt::Debug;
    type Path: Clone + Eq + std::hash::Hash + std::fmt::Debug + Ord;

    fn empty_clause(&self) -> Self::Clause;
    fn fresh_variable(&mut self) -> Self::Variable;
    fn sat(&self, clause: &Self::Clause) -> bool;
}

/// Opaque filesystem handle: a root variable, the accumulated satisfiable
/// constraint, the current working path, and (optionally) the root the
/// filesystem started from. The interpreter never mutates this in place —
/// every branch gets a fresh copy (spec §3 "Filesystem").
pub struct Filesystem<B: ConstraintBackend> {
    pub root: B::Variable,
    pub clause: B::Clause,
    pub cwd: B::Path,
    pub initial_root: Option<B::Variable>,
}

impl<B: ConstraintBackend> Filesystem<B> {
    pub fn new(root: B::Variable, clause: B::Clause, cwd: B::Path) -> Self {
        Self {
            root: root.clone(),
            clause,
            cwd,
            initial_root: Some(root),
        }
    }

    pub fn with_cwd(&self, cwd: B::Path) -> Self {
        Self {
            root: self.root.clone(),
            clause: self.clause.clone(),
            cwd,
            initial_root: self.initial_root.clone(),
        }
    }

    pub fn with_clause(&self, clause: B::Clause) -> Self {
        Self {
            root: self.root.clone(),
            clause,
            cwd: self.cwd.clone(),
            initial_root: self.initial_root.clone(),
        }
    }
}

impl<B: ConstraintBackend> Clone for Filesystem<B> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            clause: self.clause.clone(),
            cwd: self.cwd.clone(),
            initial_root: self.initial_root.clone(),
        }
    }
}

impl<B: ConstraintBackend> PartialEq for Filesystem<B> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.clause == other.clause
            && self.cwd == other.cwd
            && self.initial_root == other.initial_root
    }
}

impl<B: ConstraintBackend> Eq for Filesystem<B> {}

impl<B: ConstraintBackend> std::hash::Hash for Filesystem<B> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.clause.hash(state);
        self.cwd.hash(state);
        self.initial_root.hash(state);
    }
}

impl<B: ConstraintBackend> std::fmt::Debug for Filesystem<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filesystem")
            .field("root", &self.root)
            .field("clause", &self.clause)
            .field("cwd", &self.cwd)
            .field("initial_root", &self.initial_root)
            .finish()
    }
}
