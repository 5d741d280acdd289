use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),
    Negate(Box<Expression>),
    Variable(Rc<str>),
    Assignment {
        name: Rc<str>,
        value: Box<Expression>,
    },
    Call {
        name: Rc<str>,
        arguments: Vec<Expression>,
    },
    /// Already registered while parsing; evaluating it does nothing.
    FunctionDef(Rc<FunctionDefinition>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, PartialEq)]
pub struct FunctionDefinition {
    pub name: Rc<str>,
    pub parameters: Vec<Rc<str>>,
    pub body: Expression,
}

/// The statement list produced for one line of input.
#[derive(Debug, PartialEq)]
pub struct Program {
    pub statements: Vec<Expression>,
}

impl BinaryOperator {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }

    fn to_str(self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(val) => write!(f, "{}", val),
            Binary(operator, left, right) => {
                write!(f, "({} {} {})", left, operator.to_str(), right)
            }
            Negate(expr) => write!(f, "(-{})", expr),
            Variable(name) => write!(f, "{}", name),
            Assignment { name, value } => write!(f, "{} = {}", name, value),
            Call { name, arguments } => {
                write!(
                    f,
                    "{}({})",
                    name,
                    arguments
                        .iter()
                        .map(|arg| arg.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            }
            FunctionDef(definition) => write!(f, "{}", definition),
        }
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "def {}({}) {{ {} }}",
            self.name,
            self.parameters
                .iter()
                .map(|name| name.as_ref())
                .collect::<Box<[&str]>>()
                .join(", "),
            self.body
        )
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{};", statement)?;
        }
        Ok(())
    }
}
