//! Context
//!
//! Variable environment, function environment, positional arguments, and
//! the previous result (`$?`), bundled immutably per spec §3. Contexts
//! produced inside a subshell or function call do not escape to the
//! caller's context except via the caller's `result` field — see
//! `crate::interpreter::instruction` for where that boundary is enforced.

use std::rc::Rc;

use crate::ast::Instruction;
use crate::env::Env;
use crate::ident::Identifier;

pub type VarEnv = Env<String>;
pub type FuncEnv = Env<Option<Rc<Instruction>>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context {
    pub var_env: VarEnv,
    pub func_env: FuncEnv,
    pub arguments: Vec<String>,
    pub result: bool,
}

impl Context {
    pub fn new() -> Self {
        Self {
            var_env: VarEnv::new(String::new()),
            func_env: FuncEnv::new(None),
            arguments: Vec::new(),
            result: true,
        }
    }

    pub fn with_var(&self, id: Identifier, value: impl Into<String>) -> Self {
        let mut c = self.clone();
        c.var_env = c.var_env.with(id, value.into());
        c
    }

    pub fn with_var_env(&self, var_env: VarEnv) -> Self {
        let mut c = self.clone();
        c.var_env = var_env;
        c
    }

    pub fn with_func(&self, id: Identifier, body: Option<Rc<Instruction>>) -> Self {
        let mut c = self.clone();
        c.func_env = c.func_env.with(id, body);
        c
    }

    pub fn with_arguments(&self, arguments: Vec<String>) -> Self {
        let mut c = self.clone();
        c.arguments = arguments;
        c
    }

    pub fn with_result(&self, result: bool) -> Self {
        let mut c = self.clone();
        c.result = result;
        c
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
