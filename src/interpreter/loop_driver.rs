//! `While` loop evaluation, bounded by `Config::loop_limit` (spec §4.2 /
//! §5). Symbolic execution cannot run an unboundedly-iterating loop to a
//! fixed point, so after `loop_limit` iterations any states whose condition
//! is still `true` are moved to the `failure` bucket rather than explored
//! further: the analysis has run out of budget, which is an engine-level
//! failure to reach a verdict, not a normal program exit.

use crate::ast::Instruction;
use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::state::{Outcome, StateSet};
use crate::utility::UtilityInterpreter;

use super::{instruction::eval_instruction, EvalCtx};

pub fn eval_while<B, U>(
    ectx: &EvalCtx<B, U>,
    cond: &Instruction,
    body: &Instruction,
    states: StateSet<B>,
    input: &Input,
) -> Outcome<B>
where
    B: ConstraintBackend,
    U: UtilityInterpreter<B>,
{
    let mut acc = Outcome::empty();
    let mut active = states;
    let mut iteration: u64 = 0;

    loop {
        if active.is_empty() {
            break;
        }

        if let Some(limit) = ectx.config.loop_limit {
            if iteration >= limit {
                log::debug!(
                    "while loop bound of {} iterations reached, {} state(s) truncated to failure",
                    limit,
                    active.len()
                );
                acc.failure.extend(active);
                break;
            }
        }

        let cond_outcome = eval_instruction(ectx, cond, active, &input.forcing_condition());
        acc.exit.extend(cond_outcome.exit);
        acc.return_.extend(cond_outcome.return_);
        acc.failure.extend(cond_outcome.failure);

        let (true_states, false_states): (StateSet<B>, StateSet<B>) =
            cond_outcome.normal.into_iter().partition(|s| s.context.result);
        acc.normal.extend(false_states);

        if true_states.is_empty() {
            break;
        }

        let body_outcome = eval_instruction(ectx, body, true_states, input);
        acc.exit.extend(body_outcome.exit);
        acc.return_.extend(body_outcome.return_);
        acc.failure.extend(body_outcome.failure);
        active = body_outcome.normal;
        iteration += 1;
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ReturnCode;
    use crate::config::Config;
    use crate::constraint::null::NullBackend;
    use crate::constraint::{ConstraintBackend as _, Filesystem};
    use crate::context::Context;
    use crate::ident::Identifier;
    use crate::state::{singleton, State};

    struct AlwaysTrueUtilities;
    impl UtilityInterpreter<NullBackend> for AlwaysTrueUtilities {
        fn call(
            &self,
            _name: &Identifier,
            _arguments: &[String],
            state: &State<NullBackend>,
            context: &Context,
            _input: &Input,
        ) -> Outcome<NullBackend> {
            Outcome::single_normal(state.clone(), context.with_result(true))
        }
    }

    fn fresh() -> (State<NullBackend>, Context) {
        let backend = NullBackend::new();
        let state = State::new(
            Filesystem::new(0u64, backend.empty_clause(), "/".to_string()),
            crate::buffer::Stdin::new(),
            crate::buffer::Stdout::new(),
        );
        (state, Context::new())
    }

    #[test]
    fn test_loop_bound_truncates_to_failure() {
        let utilities = AlwaysTrueUtilities;
        let ectx = EvalCtx::new(Config::symbolic(3), &utilities);
        let (state, context) = fresh();
        let cond = Instruction::CallUtility(Identifier::new("true"), crate::ast::ListExpr::nil());
        let body = Instruction::noop();
        let out = eval_while(&ectx, &cond, &body, singleton(state, context), &Input::new("prog"));
        assert_eq!(out.failure.len(), 1);
        assert!(out.normal.is_empty());
        assert!(out.exit.is_empty());
    }

    #[test]
    fn test_loop_ends_normally_when_cond_false() {
        struct FalseAfterFirst;
        impl UtilityInterpreter<NullBackend> for FalseAfterFirst {
            fn call(
                &self,
                _name: &Identifier,
                _arguments: &[String],
                state: &State<NullBackend>,
                context: &Context,
                _input: &Input,
            ) -> Outcome<NullBackend> {
                Outcome::single_normal(state.clone(), context.with_result(false))
            }
        }
        let utilities = FalseAfterFirst;
        let ectx = EvalCtx::new(Config::symbolic(5), &utilities);
        let (state, context) = fresh();
        let cond = Instruction::CallUtility(Identifier::new("false"), crate::ast::ListExpr::nil());
        let body = Instruction::Return(ReturnCode::Success);
        let out = eval_while(&ectx, &cond, &body, singleton(state, context), &Input::new("prog"));
        assert_eq!(out.normal.len(), 1);
        assert!(!out.normal.iter().next().unwrap().context.result);
    }
}
