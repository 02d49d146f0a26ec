//! A toy `UtilityInterpreter` implementing a handful of POSIX utilities
//! concretely enough to drive the demo CLI and this crate's own
//! integration tests. Not a specified module: a real embedder plugs in
//! their own utility dispatch (shell builtins, an external-process runner,
//! or another symbolic utility model).

use crate::config::Input;
use crate::constraint::ConstraintBackend;
use crate::context::Context;
use crate::ident::Identifier;
use crate::state::{Outcome, State};
use crate::utility::UtilityInterpreter;

pub struct ToyUtilities;

impl<B: ConstraintBackend> UtilityInterpreter<B> for ToyUtilities {
    fn call(
        &self,
        name: &Identifier,
        arguments: &[String],
        state: &State<B>,
        context: &Context,
        _input: &Input,
    ) -> Outcome<B> {
        match name.as_str() {
            "true" => Outcome::single_normal(state.clone(), context.with_result(true)),
            "false" => Outcome::single_normal(state.clone(), context.with_result(false)),
            "echo" => {
                let stdout = state.stdout.append_str(&arguments.join(" ")).append_newline();
                Outcome::single_normal(state.with_stdout(stdout), context.with_result(true))
            }
            "test" | "[" => {
                let result = !arguments.is_empty() && arguments.iter().any(|a| !a.is_empty());
                Outcome::single_normal(state.clone(), context.with_result(result))
            }
            _ => {
                log::debug!("unknown utility {:?}, treating as failure", name);
                Outcome::single_normal(state.clone(), context.with_result(false))
            }
        }
    }
}
