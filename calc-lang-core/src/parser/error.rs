use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

use crate::lexer::{LexError, Token, TokenKind};

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: Token },
    #[error("expected {expected}, found end of input")]
    PrematureEndOfInput { expected: Expected },
    #[error("number literal '{0}' is out of range")]
    InvalidNumber(Rc<str>),
    #[error("parameter '{parameter}' appears twice in the definition of '{function}'")]
    DuplicateParameter {
        function: Rc<str>,
        parameter: Rc<str>,
    },
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Expected {
    Token(TokenKind),
    Expression,
}

impl ParseError {
    pub fn unexpected(expected: Expected, found: Token) -> Self {
        match found.kind {
            TokenKind::End => ParseError::PrematureEndOfInput { expected },
            _ => ParseError::UnexpectedToken { expected, found },
        }
    }

    pub fn unexpected_token(expected: TokenKind, found: Token) -> Self {
        Self::unexpected(Expected::Token(expected), found)
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Expression => write!(f, "expression"),
        }
    }
}
