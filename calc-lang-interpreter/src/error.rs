use calc_lang_core::lexer::LexError;
use calc_lang_core::parser::ParseError;
use thiserror::Error;

use crate::object::EvaluationError;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Lexing error: {0}")]
    Lex(LexError),
    #[error("Parsing error: {0}")]
    Parse(ParseError),
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvaluationError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::Lex(error) => Error::Lex(error),
            error => Error::Parse(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_errors_unwrap_from_parse_errors() {
        let lex_error = LexError::UnexpectedCharacter {
            character: '%',
            position: 4,
        };

        assert_eq!(
            Error::from(ParseError::Lex(lex_error.clone())),
            Error::Lex(lex_error)
        );
        assert_eq!(
            Error::from(ParseError::InvalidNumber("9".into())),
            Error::Parse(ParseError::InvalidNumber("9".into()))
        );
    }
}
