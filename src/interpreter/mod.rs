//! Symbolic Interpreter Core
//!
//! Mutually-recursive evaluators for `Instruction`, `StringExpr`, and
//! `ListExpr`, all "lifted" to operate over sets of symbolic states rather
//! than a single state, per spec §4 (a branching instruction like `If`
//! partitions a set of incoming states into the sets reachable from each
//! branch, rather than forcing a single path like a concrete interpreter
//! would).

mod instruction;
mod list_expr;
mod loop_driver;
mod string_expr;

pub use instruction::eval_instruction;
pub use list_expr::eval_list;
pub use string_expr::eval_str;

use crate::config::Config;
use crate::constraint::ConstraintBackend;
use crate::utility::UtilityInterpreter;

/// Everything an evaluation step needs that does not change as evaluation
/// recurses: the loop-bound configuration and the injected utility
/// dispatcher. Threaded by reference through every `eval_*` call instead
/// of being smuggled into a global, matching the teacher's pattern of
/// passing its `FileSystem`/`CommandExecutor` collaborators explicitly.
pub struct EvalCtx<'a, B: ConstraintBackend, U: UtilityInterpreter<B>> {
    pub config: Config,
    pub utilities: &'a U,
    _backend: std::marker::PhantomData<B>,
}

impl<'a, B: ConstraintBackend, U: UtilityInterpreter<B>> EvalCtx<'a, B, U> {
    pub fn new(config: Config, utilities: &'a U) -> Self {
        Self {
            config,
            utilities,
            _backend: std::marker::PhantomData,
        }
    }
}

/// Apply a single-state evaluator (`f`) to every state in `states`, unioning
/// the resulting `Outcome`s bucket by bucket. This is the one place the
/// "lifting" from per-state evaluation to per-state-set evaluation happens;
/// every `eval_*` function below is written against a single
/// `SymbolicState` and then lifted at its call sites via this helper.
pub(crate) fn eval_lifted<B, F>(
    states: crate::state::StateSet<B>,
    mut f: F,
) -> crate::state::Outcome<B>
where
    B: ConstraintBackend,
    F: FnMut(crate::state::State<B>, crate::context::Context) -> crate::state::Outcome<B>,
{
    let mut acc = crate::state::Outcome::empty();
    for s in states {
        acc = acc.union(f(s.state, s.context));
    }
    acc
}
