pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod object;

use calc_lang_core::parser;

pub use environment::Environment;
pub use error::Error;

// Definitions are registered while parsing, before any statement runs.
pub fn evaluate_line(input: &str, environment: &mut Environment) -> Result<f64, Error> {
    let program = parser::parse(input, environment)?;
    Ok(evaluator::eval_program(&program, environment)?)
}
