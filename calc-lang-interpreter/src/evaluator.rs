use std::rc::Rc;

use calc_lang_core::ast;
use calc_lang_core::ast::Expression;

use crate::environment::Environment;
use crate::object::EvaluationError;

pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<f64, EvaluationError> {
    let mut output = 0.0;
    for statement in &program.statements {
        output = eval_expression(statement, environment)?;
    }
    Ok(output)
}

pub fn eval_expression(
    expression: &Expression,
    environment: &mut Environment,
) -> Result<f64, EvaluationError> {
    match expression {
        Expression::Number(value) => Ok(*value),
        Expression::Binary(operator, left, right) => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            Ok(operator.apply(left, right))
        }
        Expression::Negate(expression) => Ok(-eval_expression(expression, environment)?),
        Expression::Variable(name) => Ok(environment.get(name)),
        Expression::Assignment { name, value } => {
            let value = eval_expression(value, environment)?;
            environment.set(name.clone(), value);
            Ok(value)
        }
        Expression::Call { name, arguments } => {
            if let Some(function) = environment.function(name) {
                return eval_call_function(&function, arguments, environment);
            }
            eval_call_builtin_function(name, arguments, environment)
        }
        Expression::FunctionDef(_) => Ok(0.0),
    }
}

// Parameters live in the global table until the saved copy is put back.
fn eval_call_function(
    function: &ast::FunctionDefinition,
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<f64, EvaluationError> {
    if function.parameters.len() != arguments.len() {
        return Err(EvaluationError::ArityMismatch {
            function: function.name.clone(),
            expected: function.parameters.len(),
            actual: arguments.len(),
        });
    }

    environment.enter_call()?;
    log::debug!("calling {}", function.name);

    let saved = environment.snapshot_variables();
    let result = apply_function(function, arguments, environment);
    environment.restore_variables(saved);
    environment.exit_call();

    result
}

fn apply_function(
    function: &ast::FunctionDefinition,
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<f64, EvaluationError> {
    // Each argument already sees the parameters bound before it
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        let value = eval_expression(argument, environment)?;
        environment.set(parameter.clone(), value);
    }
    eval_expression(&function.body, environment)
}

fn eval_call_builtin_function(
    name: &Rc<str>,
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<f64, EvaluationError> {
    let arguments = eval_expressions(arguments, environment)?;
    let Some(function) = environment.builtin(name) else {
        return Err(EvaluationError::UnknownFunction(name.clone()));
    };
    log::debug!("calling builtin {} with {:?}", function.name, arguments);
    function.call(&arguments)
}

fn eval_expressions(
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<Vec<f64>, EvaluationError> {
    let mut result = Vec::with_capacity(arguments.len());
    for argument in arguments {
        result.push(eval_expression(argument, environment)?);
    }
    Ok(result)
}
