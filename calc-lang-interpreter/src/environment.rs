use std::collections::HashMap;
use std::rc::Rc;

use calc_lang_core::ast::FunctionDefinition;
use calc_lang_core::parser::FunctionRegistry;

use crate::object::{BuiltinFunction, EvaluationError};

pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<Rc<str>, f64>,
    builtins: HashMap<Rc<str>, BuiltinFunction>,
    functions: HashMap<Rc<str>, Rc<FunctionDefinition>>,
    max_call_depth: usize,
    call_depth: usize,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
            builtins: HashMap::new(),
            functions: HashMap::new(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            call_depth: 0,
        }
    }

    /// An environment with `max`, `min`, `pow` and `abs` already registered.
    pub fn with_builtins() -> Self {
        let mut environment = Self::new();
        crate::builtins::register_defaults(&mut environment);
        environment
    }

    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    pub fn get(&self, key: &str) -> f64 {
        self.variables.get(key).copied().unwrap_or(0.0)
    }

    pub fn variable(&self, key: &str) -> Option<f64> {
        self.variables.get(key).copied()
    }

    pub fn set(&mut self, key: Rc<str>, value: f64) {
        self.variables.insert(key, value);
    }

    pub fn define_builtin(
        &mut self,
        name: &str,
        func: impl Fn(&[f64]) -> Result<f64, EvaluationError> + 'static,
    ) {
        let builtin = BuiltinFunction::new(name, func);
        self.builtins.insert(builtin.name.clone(), builtin);
    }

    pub fn builtin(&self, name: &str) -> Option<&BuiltinFunction> {
        self.builtins.get(name)
    }

    pub fn function(&self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.functions.get(name).cloned()
    }

    pub(crate) fn snapshot_variables(&self) -> HashMap<Rc<str>, f64> {
        self.variables.clone()
    }

    pub(crate) fn restore_variables(&mut self, variables: HashMap<Rc<str>, f64>) {
        self.variables = variables;
    }

    pub(crate) fn enter_call(&mut self) -> Result<(), EvaluationError> {
        if self.call_depth >= self.max_call_depth {
            return Err(EvaluationError::CallDepthExceeded(self.max_call_depth));
        }
        self.call_depth += 1;
        Ok(())
    }

    pub(crate) fn exit_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }
}

impl FunctionRegistry for Environment {
    fn register_function(&mut self, definition: Rc<FunctionDefinition>) {
        self.functions.insert(definition.name.clone(), definition);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
