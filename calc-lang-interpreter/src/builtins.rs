use crate::environment::Environment;
use crate::object::EvaluationError;

type Builtin = fn(&[f64]) -> Result<f64, EvaluationError>;

fn expect_arguments(name: &str, expected: usize, args: &[f64]) -> Result<(), EvaluationError> {
    if args.len() != expected {
        return Err(EvaluationError::ArityMismatch {
            function: name.into(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn builtin_max(args: &[f64]) -> Result<f64, EvaluationError> {
    expect_arguments("max", 2, args)?;
    Ok(args[0].max(args[1]))
}

fn builtin_min(args: &[f64]) -> Result<f64, EvaluationError> {
    expect_arguments("min", 2, args)?;
    Ok(args[0].min(args[1]))
}

fn builtin_pow(args: &[f64]) -> Result<f64, EvaluationError> {
    expect_arguments("pow", 2, args)?;
    Ok(args[0].powf(args[1]))
}

fn builtin_abs(args: &[f64]) -> Result<f64, EvaluationError> {
    expect_arguments("abs", 1, args)?;
    Ok(args[0].abs())
}

const DEFAULTS: [(&str, Builtin); 4] = [
    ("max", builtin_max),
    ("min", builtin_min),
    ("pow", builtin_pow),
    ("abs", builtin_abs),
];

pub fn register_defaults(environment: &mut Environment) {
    for (name, func) in DEFAULTS {
        environment.define_builtin(name, func);
    }
}
