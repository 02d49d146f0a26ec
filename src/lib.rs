//! colis-sym: a symbolic execution core for a small shell-like maintainer
//! script language.
//!
//! The crate is deliberately agnostic about the two hardest parts of a
//! real symbolic shell analyzer: parsing (see [`ast`], which assumes an
//! AST already exists) and constraint solving over the filesystem (see
//! [`constraint`], which only defines the interface a real tree-automaton
//! solver would implement). What's left — driving a set of symbolic
//! states through the operational semantics of [`ast::Instruction`] and
//! partitioning the result into normal/exit/return/failure buckets — is
//! the actual subject of this crate.

pub mod ast;
pub mod buffer;
pub mod config;
pub mod constraint;
pub mod context;
pub mod driver;
pub mod env;
pub mod errors;
pub mod ident;
pub mod interpreter;
pub mod state;
pub mod testkit;
pub mod utility;

pub use ast::{Instruction, ListExpr, Program, ReturnCode, Splitting, StringExpr};
pub use config::{Config, ConfigBuilder, Input};
pub use context::Context;
pub use driver::{run_program, ProgramOutcome};
pub use errors::ConfigError;
pub use ident::Identifier;
pub use interpreter::EvalCtx;
pub use state::{Outcome, State, StateSet, SymbolicState};
pub use utility::UtilityInterpreter;
