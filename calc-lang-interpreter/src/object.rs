use std::rc::Rc;

use thiserror::Error;

type BuiltinFn = dyn Fn(&[f64]) -> Result<f64, EvaluationError>;

/// A host-provided function callable from the language by name.
#[derive(Clone)]
pub struct BuiltinFunction {
    pub name: Rc<str>,
    func: Rc<BuiltinFn>,
}

impl BuiltinFunction {
    pub fn new(
        name: impl Into<Rc<str>>,
        func: impl Fn(&[f64]) -> Result<f64, EvaluationError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    pub fn call(&self, arguments: &[f64]) -> Result<f64, EvaluationError> {
        (self.func)(arguments)
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.func, &other.func)
    }
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("ptr", &Rc::as_ptr(&self.func))
            .finish()
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("Unknown function: {0}")]
    UnknownFunction(Rc<str>),
    #[error(
        "Wrong number of arguments for function {function}. Expected {expected}, got {actual}"
    )]
    ArityMismatch {
        function: Rc<str>,
        expected: usize,
        actual: usize,
    },
    #[error("Maximum call depth of {0} exceeded")]
    CallDepthExceeded(usize),
    #[error("Builtin function error: {0}")]
    BuiltinFunctionError(Rc<str>),
}
