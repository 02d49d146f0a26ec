//! List expression evaluation (`eval_list`).

use crate::ast::{ListExpr, Splitting};
use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::state::{State, ValueOutcome};
use crate::utility::UtilityInterpreter;

use super::{string_expr::eval_str, EvalCtx};

/// Split on runs of ASCII whitespace, dropping empty fields, matching the
/// field-splitting behaviour of an unquoted shell word.
pub(crate) fn split_whitespace_runs(s: &str) -> Vec<String> {
    s.split_whitespace().map(|w| w.to_string()).collect()
}

/// Evaluate a `ListExpr` against a single state, threading state/context
/// through each component left to right (so a later component sees any
/// variable assignment or stdout effect from an earlier `Subshell`).
pub fn eval_list<B, U>(
    ectx: &EvalCtx<B, U>,
    list: &ListExpr,
    state: State<B>,
    context: Context,
    input: &Input,
) -> ValueOutcome<B, Vec<String>>
where
    B: ConstraintBackend,
    U: UtilityInterpreter<B>,
{
    let mut frontier: Vec<(Vec<String>, State<B>, Context)> = vec![(Vec::new(), state, context)];
    let mut acc = ValueOutcome::empty();

    for (expr, splitting) in &list.0 {
        let mut next_frontier = Vec::new();
        for (items_so_far, st, ctx) in frontier {
            let part = eval_str(ectx, expr, st, ctx, input);
            acc.exit.extend(part.exit);
            acc.return_.extend(part.return_);
            acc.failure.extend(part.failure);
            for (value, nstate, ncontext) in part.normal {
                let mut items = items_so_far.clone();
                match splitting {
                    Splitting::Split => items.extend(split_whitespace_runs(&value)),
                    Splitting::DontSplit => items.push(value),
                }
                next_frontier.push((items, nstate, ncontext));
            }
        }
        frontier = next_frontier;
    }

    acc.normal = frontier;
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StringExpr;
    use crate::config::Config;
    use crate::constraint::null::NullBackend;
    use crate::constraint::{ConstraintBackend as _, Filesystem};
    use crate::ident::Identifier;

    struct NoUtilities;
    impl UtilityInterpreter<NullBackend> for NoUtilities {
        fn call(
            &self,
            _name: &Identifier,
            _arguments: &[String],
            state: &State<NullBackend>,
            context: &Context,
            _input: &Input,
        ) -> crate::state::Outcome<NullBackend> {
            crate::state::Outcome::single_normal(state.clone(), context.clone())
        }
    }

    fn fresh_state() -> State<NullBackend> {
        let backend = NullBackend::new();
        State::new(
            Filesystem::new(0u64, backend.empty_clause(), "/".to_string()),
            crate::buffer::Stdin::new(),
            crate::buffer::Stdout::new(),
        )
    }

    #[test]
    fn test_split_whitespace_runs_drops_empties() {
        assert_eq!(split_whitespace_runs("  a  b   c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_eval_list_splits_unquoted_words() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let list = ListExpr::from_vec(vec![(StringExpr::literal("a b"), Splitting::Split)]);
        let out = eval_list(&ectx, &list, fresh_state(), Context::new(), &Input::new("prog"));
        assert_eq!(out.normal[0].0, vec!["a", "b"]);
    }

    #[test]
    fn test_eval_list_dont_split_keeps_whole_value() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let list = ListExpr::from_vec(vec![(StringExpr::literal("a b"), Splitting::DontSplit)]);
        let out = eval_list(&ectx, &list, fresh_state(), Context::new(), &Input::new("prog"));
        assert_eq!(out.normal[0].0, vec!["a b"]);
    }
}
