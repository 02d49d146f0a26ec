//! Instruction evaluation (`eval_instruction`) — the 14 operational rules
//! of spec §4.

use crate::ast::Instruction;
use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::state::{maybe_exit, singleton, Outcome, State, StateSet, SymbolicState};
use crate::utility::UtilityInterpreter;

use super::list_expr::eval_list;
use super::loop_driver::eval_while;
use super::string_expr::eval_str;
use super::{eval_lifted, EvalCtx};

/// Evaluate `instr` against every state in `states`, returning the
/// four-way `Outcome` partition. This is the main recursive entry point;
/// all of `Sequence`/`If`/`Not`/... recurse back into this function for
/// their sub-instructions.
pub fn eval_instruction<B, U>(
    ectx: &EvalCtx<B, U>,
    instr: &Instruction,
    states: StateSet<B>,
    input: &Input,
) -> Outcome<B>
where
    B: ConstraintBackend,
    U: UtilityInterpreter<B>,
{
    match instr {
        Instruction::Exit(rc) => eval_lifted(states, |state, context| {
            let result = rc.resolve(context.result);
            Outcome::single_exit(state, context.with_result(result))
        }),

        Instruction::Return(rc) => eval_lifted(states, |state, context| {
            let result = rc.resolve(context.result);
            Outcome::single_return(state, context.with_result(result))
        }),

        Instruction::Shift(n) => eval_lifted(states, |state, context| {
            let n = n.unwrap_or(1) as usize;
            let new_context = if n <= context.arguments.len() {
                let mut arguments = context.arguments.clone();
                arguments.drain(0..n);
                context.with_arguments(arguments).with_result(true)
            } else {
                context.with_result(false)
            };
            let (normal, exit) = maybe_exit(singleton(state, new_context), input.strict());
            Outcome {
                normal,
                exit,
                ..Outcome::empty()
            }
        }),

        Instruction::Assignment(id, expr) => eval_lifted(states, |state, context| {
            let str_outcome = eval_str(ectx, expr, state, context, input);
            let mut acc = Outcome::empty();
            acc.exit = str_outcome.exit;
            acc.return_ = str_outcome.return_;
            acc.failure = str_outcome.failure;
            let mut assigned = StateSet::new();
            for (value, st, ctx) in str_outcome.normal {
                let new_context = ctx.with_var(id.clone(), value).with_result(true);
                assigned.insert(SymbolicState::new(st, new_context));
            }
            let (normal, exit_from_false) = maybe_exit(assigned, input.strict());
            acc.normal = normal;
            acc.exit.extend(exit_from_false);
            acc
        }),

        Instruction::Sequence(a, b) => {
            let outcome_a = eval_instruction(ectx, a, states, input);
            let outcome_b = eval_instruction(ectx, b, outcome_a.normal, input);
            Outcome {
                normal: outcome_b.normal,
                exit: union(outcome_a.exit, outcome_b.exit),
                return_: union(outcome_a.return_, outcome_b.return_),
                failure: union(outcome_a.failure, outcome_b.failure),
            }
        }

        Instruction::Subshell(body) => eval_lifted(states, |state, context| {
            let sub_input = Input::new(input.argument0.clone());
            let incoming = singleton(state.clone(), context.clone());
            let sub_outcome = eval_instruction(ectx, body, incoming, &sub_input);

            let mut completed = StateSet::new();
            completed.extend(sub_outcome.normal);
            completed.extend(sub_outcome.exit);
            completed.extend(sub_outcome.return_);

            let mut acc = Outcome::empty();
            acc.failure = sub_outcome.failure;
            let mut escaped = StateSet::new();
            for symbolic in completed {
                // Only the filesystem escapes a subshell; stdin/stdout and
                // the variable/function environment are restored to what
                // the caller had before entering it. The subshell's own
                // result does escape, so the caller can still apply
                // maybe-exit on it.
                let escaped_state = State::new(symbolic.state.filesystem, state.stdin.clone(), state.stdout.clone());
                let escaped_context = context.with_result(symbolic.context.result);
                escaped.insert(SymbolicState::new(escaped_state, escaped_context));
            }
            let (normal, exit) = maybe_exit(escaped, input.strict());
            acc.normal = normal;
            acc.exit.extend(exit);
            acc
        }),

        Instruction::Not(body) => eval_lifted(states, |state, context| {
            let inner = eval_instruction(
                ectx,
                body,
                singleton(state, context),
                &input.forcing_condition(),
            );
            let flipped: StateSet<B> = inner
                .normal
                .into_iter()
                .map(|s| {
                    let result = !s.context.result;
                    SymbolicState::new(s.state, s.context.with_result(result))
                })
                .collect();
            let (normal, exit_from_false) = maybe_exit(flipped, input.strict());
            Outcome {
                normal,
                exit: union(inner.exit, exit_from_false),
                return_: inner.return_,
                failure: inner.failure,
            }
        }),

        Instruction::NoOutput(body) => eval_lifted(states, |state, context| {
            let original_stdout = state.stdout.clone();
            let inner = eval_instruction(ectx, body, singleton(state, context), input);
            let restore = |set: StateSet<B>| -> StateSet<B> {
                set.into_iter()
                    .map(|s| SymbolicState::new(s.state.with_stdout(original_stdout.clone()), s.context))
                    .collect()
            };
            Outcome {
                normal: restore(inner.normal),
                exit: restore(inner.exit),
                return_: restore(inner.return_),
                failure: inner.failure,
            }
        }),

        Instruction::If(cond, then_branch, else_branch) => eval_lifted(states, |state, context| {
            let cond_outcome = eval_instruction(
                ectx,
                cond,
                singleton(state, context),
                &input.forcing_condition(),
            );
            let (true_states, false_states): (StateSet<B>, StateSet<B>) = cond_outcome
                .normal
                .into_iter()
                .partition(|s| s.context.result);

            let then_outcome = eval_instruction(ectx, then_branch, true_states, input);
            let else_outcome = eval_instruction(ectx, else_branch, false_states, input);

            Outcome {
                normal: union(then_outcome.normal, else_outcome.normal),
                exit: union(cond_outcome.exit, union(then_outcome.exit, else_outcome.exit)),
                return_: union(cond_outcome.return_, union(then_outcome.return_, else_outcome.return_)),
                failure: union(cond_outcome.failure, union(then_outcome.failure, else_outcome.failure)),
            }
        }),

        Instruction::Pipe(left, right) => eval_lifted(states, |state, context| {
            let captured_state = state.with_stdout(crate::buffer::Stdout::new());
            let left_outcome = eval_instruction(ectx, left, singleton(captured_state, context), input);

            let restore = |set: StateSet<B>| -> StateSet<B> {
                set.into_iter()
                    .map(|s| SymbolicState::new(s.state.with_stdout(state.stdout.clone()), s.context))
                    .collect()
            };

            let mut acc = Outcome::empty();
            acc.exit = restore(left_outcome.exit);
            acc.return_ = restore(left_outcome.return_);
            acc.failure = left_outcome.failure;

            let mut right_inputs = StateSet::new();
            for symbolic in left_outcome.normal {
                let piped_stdin = symbolic.state.stdout.pipe_to_stdin();
                let right_state = State::new(symbolic.state.filesystem, piped_stdin, state.stdout.clone());
                right_inputs.insert(SymbolicState::new(right_state, symbolic.context));
            }
            let right_outcome = eval_instruction(ectx, right, right_inputs, input);
            acc.normal.extend(right_outcome.normal);
            acc.exit.extend(right_outcome.exit);
            acc.return_.extend(right_outcome.return_);
            acc.failure.extend(right_outcome.failure);
            acc
        }),

        Instruction::CallUtility(name, args) => eval_lifted(states, |state, context| {
            let list_outcome = eval_list(ectx, args, state, context, input);
            let mut acc = Outcome::empty();
            acc.exit = list_outcome.exit;
            acc.return_ = list_outcome.return_;
            acc.failure = list_outcome.failure;
            for (arguments, st, ctx) in list_outcome.normal {
                let call_outcome = ectx.utilities.call(name, &arguments, &st, &ctx, input);
                let (normal, exit_from_false) = maybe_exit(call_outcome.normal, input.strict());
                acc.normal.extend(normal);
                acc.exit.extend(exit_from_false);
                acc.exit.extend(call_outcome.exit);
                acc.return_.extend(call_outcome.return_);
                acc.failure.extend(call_outcome.failure);
            }
            acc
        }),

        Instruction::CallFunction(name, args) => eval_lifted(states, |state, context| {
            let Some(body) = context.func_env.get(name) else {
                // No such function: a normal program-level failure
                // (result := false), not an engine failure — escalates to
                // `Exit` under the same maybe-exit rule as any other
                // unconditional command.
                let failed = singleton(state, context.with_result(false));
                let (normal, exit) = maybe_exit(failed, input.strict());
                return Outcome {
                    normal,
                    exit,
                    ..Outcome::empty()
                };
            };

            let list_outcome = eval_list(ectx, args, state, context, input);
            let mut acc = Outcome::empty();
            acc.exit = list_outcome.exit;
            acc.return_ = list_outcome.return_;
            acc.failure = list_outcome.failure;

            for (arguments, st, ctx) in list_outcome.normal {
                let original_arguments = ctx.arguments.clone();
                let call_context = ctx.with_arguments(arguments);
                let body_outcome = eval_instruction(ectx, &body, singleton(st, call_context), input);

                // A function call absorbs `Return` (the call completes
                // normally) but not `Exit` (which terminates the whole
                // program, same as an `exit` builtin invoked directly).
                let restore_args = |set: StateSet<B>| -> StateSet<B> {
                    set.into_iter()
                        .map(|s| {
                            let context = s.context.with_arguments(original_arguments.clone());
                            SymbolicState::new(s.state, context)
                        })
                        .collect()
                };
                acc.normal.extend(restore_args(body_outcome.normal));
                acc.normal.extend(restore_args(body_outcome.return_));
                acc.exit.extend(body_outcome.exit);
                acc.failure.extend(body_outcome.failure);
            }
            acc
        }),

        Instruction::Foreach(var, list, body) => eval_lifted(states, |state, context| {
            let list_outcome = eval_list(ectx, list, state, context, input);
            let mut acc = Outcome::empty();
            acc.exit = list_outcome.exit;
            acc.return_ = list_outcome.return_;
            acc.failure = list_outcome.failure;

            for (items, st, ctx) in list_outcome.normal {
                let mut frontier: StateSet<B> = singleton(st, ctx);
                for item in items {
                    if frontier.is_empty() {
                        break;
                    }
                    let with_var: StateSet<B> = frontier
                        .into_iter()
                        .map(|s| SymbolicState::new(s.state, s.context.with_var(var.clone(), item.clone())))
                        .collect();
                    let body_outcome = eval_instruction(ectx, body, with_var, input);
                    acc.exit.extend(body_outcome.exit);
                    acc.return_.extend(body_outcome.return_);
                    acc.failure.extend(body_outcome.failure);
                    frontier = body_outcome.normal;
                }
                acc.normal.extend(frontier);
            }
            acc
        }),

        Instruction::While(cond, body) => eval_while(ectx, cond, body, states, input),
    }
}

fn union<B: ConstraintBackend>(mut a: StateSet<B>, b: StateSet<B>) -> StateSet<B> {
    a.extend(b);
    a
}
