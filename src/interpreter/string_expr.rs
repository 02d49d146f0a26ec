//! String expression evaluation (`eval_str`).

use crate::ast::StringExpr;
use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::state::{singleton, State, StateSet, ValueOutcome};
use crate::utility::UtilityInterpreter;

use super::{instruction::eval_instruction, EvalCtx};

/// Evaluate a `StringExpr` against a single state, producing the string
/// value(s) it reduces to along with any control-flow escape (`Subshell`
/// runs a full instruction, which can exit/return/fail).
pub fn eval_str<B, U>(
    ectx: &EvalCtx<B, U>,
    expr: &StringExpr,
    state: State<B>,
    context: Context,
    input: &Input,
) -> ValueOutcome<B, String>
where
    B: ConstraintBackend,
    U: UtilityInterpreter<B>,
{
    match expr {
        StringExpr::Literal(s) => ValueOutcome::single(s.clone(), state, context),

        StringExpr::Variable(id) => {
            let value = context.var_env.get(id);
            ValueOutcome::single(value, state, context)
        }

        StringExpr::Argument(n) => {
            let value = if *n == 0 {
                input.argument0.clone()
            } else {
                context.arguments.get((*n as usize) - 1).cloned().unwrap_or_default()
            };
            ValueOutcome::single(value, state, context)
        }

        StringExpr::Concat(left, right) => {
            let left_outcome = eval_str(ectx, left, state, context, input);
            let mut acc = ValueOutcome::empty();
            acc.exit = left_outcome.exit;
            acc.return_ = left_outcome.return_;
            acc.failure = left_outcome.failure;
            for (lval, lstate, lcontext) in left_outcome.normal {
                let right_outcome = eval_str(ectx, right, lstate, lcontext, input);
                acc.exit.extend(right_outcome.exit);
                acc.return_.extend(right_outcome.return_);
                acc.failure.extend(right_outcome.failure);
                for (rval, rstate, rcontext) in right_outcome.normal {
                    acc.normal.push((format!("{}{}", lval, rval), rstate, rcontext));
                }
            }
            acc
        }

        StringExpr::Subshell(instr) => {
            let sub_input = Input::new(input.argument0.clone());
            let incoming: StateSet<B> = singleton(state.clone(), context.clone());
            let sub_outcome = eval_instruction(ectx, instr, incoming, &sub_input);

            // A subshell absorbs both `Return` and `Exit`: command
            // substitution terminates its own subshell process but never
            // the caller, so both buckets complete normally from the
            // caller's point of view. Only an engine-level `failure`
            // propagates further up.
            let mut completed = StateSet::new();
            completed.extend(sub_outcome.normal);
            completed.extend(sub_outcome.exit);
            completed.extend(sub_outcome.return_);

            let mut acc = ValueOutcome::empty();
            acc.failure = sub_outcome.failure;
            for symbolic in completed {
                let value = symbolic.state.stdout.to_string_lossy();
                // stdin/stdout never escape a subshell; the filesystem
                // (and thus any side effect visible through it) does.
                let escaped_state = State::new(symbolic.state.filesystem, state.stdin.clone(), state.stdout.clone());
                acc.normal.push((value, escaped_state, context.clone()));
            }
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Instruction;
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
    fn test_literal_is_identity() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let out = eval_str(
            &ectx,
            &StringExpr::literal("hi"),
            fresh_state(),
            Context::new(),
            &Input::new("prog"),
        );
        assert_eq!(out.normal.len(), 1);
        assert_eq!(out.normal[0].0, "hi");
    }

    #[test]
    fn test_argument_zero_is_argument0_not_first_positional() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let context = Context::new().with_arguments(vec!["first".to_string()]);
        let out = eval_str(
            &ectx,
            &StringExpr::Argument(0),
            fresh_state(),
            context,
            &Input::new("myscript"),
        );
        assert_eq!(out.normal[0].0, "myscript");
    }

    #[test]
    fn test_argument_one_indexes_into_arguments() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let context = Context::new().with_arguments(vec!["first".to_string()]);
        let out = eval_str(
            &ectx,
            &StringExpr::Argument(1),
            fresh_state(),
            context,
            &Input::new("myscript"),
        );
        assert_eq!(out.normal[0].0, "first");
    }

    #[test]
    fn test_concat_joins_values() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let expr = StringExpr::concat(StringExpr::literal("a"), StringExpr::literal("b"));
        let out = eval_str(&ectx, &expr, fresh_state(), Context::new(), &Input::new("prog"));
        assert_eq!(out.normal[0].0, "ab");
    }

    #[test]
    fn test_subshell_captures_stdout_and_escapes_filesystem() {
        let utilities = NoUtilities;
        let ectx = EvalCtx::new(Config::symbolic(10), &utilities);
        let body = Instruction::CallUtility(Identifier::new("echo"), crate::ast::ListExpr::nil());
        let expr = StringExpr::Subshell(std::rc::Rc::new(body));
        let out = eval_str(&ectx, &expr, fresh_state(), Context::new(), &Input::new("prog"));
        assert_eq!(out.normal.len(), 1);
        assert_eq!(out.normal[0].0, "");
    }
}
