//! Program Driver
//!
//! Wires a `Program`'s function definitions into a fresh `Context`, runs
//! its top-level instruction over a single starting state, and classifies
//! the resulting `Outcome` into the driver-level success/failure/engine
//! failure populations a caller actually wants (spec §3 "Program",
//! property P4: a top-level `Return` behaves like `Exit`).

use crate::ast::Program;
use crate::config::{Config, Input};
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::errors::ConfigError;
use crate::interpreter::eval_instruction;
use crate::state::{singleton, State, StateSet};
use crate::utility::UtilityInterpreter;

/// The outcome of running a whole program: every state partitioned by
/// whether it finished with `ctx.result = true` or `false`, plus the set
/// of states that hit an engine-level failure (an undefined function call,
/// for instance).
pub struct ProgramOutcome<B: ConstraintBackend> {
    pub success: StateSet<B>,
    pub failed: StateSet<B>,
    pub engine_failure: StateSet<B>,
}

impl<B: ConstraintBackend> ProgramOutcome<B> {
    pub fn total_reached(&self) -> usize {
        self.success.len() + self.failed.len() + self.engine_failure.len()
    }
}

/// Run `program` over a single `start` state with the given `arguments`
/// and `$0`. Requires `config.loop_limit` to be set, since the symbolic
/// core cannot otherwise guarantee a `While` loop terminates.
pub fn run_program<B, U>(
    config: Config,
    utilities: &U,
    program: &Program,
    start: State<B>,
    argument0: impl Into<String>,
    arguments: Vec<String>,
) -> Result<ProgramOutcome<B>, ConfigError>
where
    B: ConstraintBackend,
    U: UtilityInterpreter<B>,
{
    match config.loop_limit {
        None => return Err(ConfigError::MissingLoopLimit),
        Some(0) => return Err(ConfigError::ZeroLoopLimit),
        Some(_) => {}
    }

    let ectx = crate::interpreter::EvalCtx::new(config, utilities);
    let mut context = Context::new().with_arguments(arguments);
    for (name, body) in &program.function_definitions {
        context = context.with_func(name.clone(), Some(body.clone()));
    }

    let input = Input::new(argument0);
    let states: StateSet<B> = singleton(start, context);
    let outcome = eval_instruction(&ectx, &program.instruction, states, &input);

    // Property P4: a `Return` reaching the top level behaves like `Exit`,
    // since there is no caller left to absorb it.
    let mut terminal = StateSet::new();
    terminal.extend(outcome.normal);
    terminal.extend(outcome.exit);
    terminal.extend(outcome.return_);

    let mut success = StateSet::new();
    let mut failed = StateSet::new();
    for symbolic in terminal {
        if symbolic.context.result {
            success.insert(symbolic);
        } else {
            failed.insert(symbolic);
        }
    }

    Ok(ProgramOutcome {
        success,
        failed,
        engine_failure: outcome.failure,
    })
}
