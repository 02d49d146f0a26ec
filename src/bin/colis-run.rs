//! Demonstration CLI harness.
//!
//! This crate has no parser (spec §1 Non-goals): there is no way to feed
//! it an arbitrary script from the command line. What this binary does is
//! wire a small hardcoded demo [`Program`] to [`colis_sym::run_program`]
//! with the inert [`NullBackend`]/[`ToyUtilities`] collaborators and print
//! the resulting success/failure/engine-failure population sizes, so the
//! crate can be exercised end to end without embedding it in another
//! project.

use std::rc::Rc;

use clap::Parser;
use colis_sym::ast::{Instruction, ListExpr, Program, ReturnCode, Splitting, StringExpr};
use colis_sym::constraint::null::NullBackend;
use colis_sym::constraint::{ConstraintBackend, Filesystem};
use colis_sym::ident::Identifier;
use colis_sym::testkit::ToyUtilities;
use colis_sym::{run_program, Config, State};

#[derive(Parser)]
#[command(name = "colis-run")]
#[command(about = "Run the built-in demo program through the symbolic execution core")]
#[command(version)]
struct Cli {
    /// Bound on while-loop iterations explored per branch.
    #[arg(long = "loop-limit", default_value_t = 16)]
    loop_limit: u64,

    /// Emit the result summary as JSON instead of plain text.
    #[arg(long = "json")]
    json: bool,
}

fn demo_program() -> Program {
    // if true; then echo hi; else false; fi
    let cond = Instruction::CallUtility(Identifier::new("true"), ListExpr::nil());
    let then_branch = Instruction::CallUtility(
        Identifier::new("echo"),
        ListExpr::from_vec(vec![(StringExpr::literal("hi"), Splitting::DontSplit)]),
    );
    let else_branch = Instruction::CallUtility(Identifier::new("false"), ListExpr::nil());
    let instruction = Instruction::If(Rc::new(cond), Rc::new(then_branch), Rc::new(else_branch));
    let instruction = Instruction::sequence(instruction, Instruction::Exit(ReturnCode::Previous));

    Program {
        function_definitions: Vec::new(),
        instruction: Rc::new(instruction),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let backend = NullBackend::new();
    let start: State<NullBackend> = State::new(
        Filesystem::new(0u64, backend.empty_clause(), "/".to_string()),
        colis_sym::buffer::Stdin::new(),
        colis_sym::buffer::Stdout::new(),
    );

    let config = Config::symbolic(cli.loop_limit);
    let utilities = ToyUtilities;
    let program = demo_program();

    let outcome = match run_program(config, &utilities, &program, start, "colis-run", Vec::new()) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(2);
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "success": outcome.success.len(),
                "failed": outcome.failed.len(),
                "engine_failure": outcome.engine_failure.len(),
            })
        );
    } else {
        println!("success states:        {}", outcome.success.len());
        println!("failed states:         {}", outcome.failed.len());
        println!("engine failure states: {}", outcome.engine_failure.len());
        for symbolic in &outcome.success {
            print!("{}", symbolic.state.stdout.to_string_lossy());
        }
    }

    if outcome.engine_failure.is_empty() {
        std::process::exit(0);
    }
    std::process::exit(1);
}
