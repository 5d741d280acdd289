pub mod error;
pub mod expressions;
pub mod statements;

use std::rc::Rc;

use crate::ast::{FunctionDefinition, Program};
use crate::lexer::{Token, TokenKind, Tokenizer};
pub use error::{Expected, ParseError};
use statements::parse_statement;

/// Receives function definitions as soon as they are parsed, so later
/// statements (and later lines) can call them.
pub trait FunctionRegistry {
    fn register_function(&mut self, definition: Rc<FunctionDefinition>);
}

pub struct Parser<'src, 'reg> {
    tokenizer: Tokenizer<'src>,
    lookahead: Option<Token>,
    registry: &'reg mut dyn FunctionRegistry,
}

pub fn parse(input: &str, registry: &mut dyn FunctionRegistry) -> Result<Program, ParseError> {
    Parser::new(Tokenizer::new(input), registry).parse_program()
}

impl<'src, 'reg> Parser<'src, 'reg> {
    pub fn new(tokenizer: Tokenizer<'src>, registry: &'reg mut dyn FunctionRegistry) -> Self {
        Self {
            tokenizer,
            lookahead: None,
            registry,
        }
    }

    pub(crate) fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.read_token()?,
        };
        Ok(&*self.lookahead.insert(token))
    }

    pub(crate) fn peek_kind(&mut self) -> Result<TokenKind, ParseError> {
        Ok(self.peek()?.kind)
    }

    pub(crate) fn next(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    fn read_token(&mut self) -> Result<Token, ParseError> {
        let token = self.tokenizer.next_token()?;
        log::trace!("read {:?} {:?}", token.kind, token.text);
        Ok(token)
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Rc<str>, ParseError> {
        Ok(self.expect_token(TokenKind::Ident)?.text)
    }

    pub(crate) fn expect_token(&mut self, token_kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.next()?;
        if token.kind == token_kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected_token(token_kind, token))
        }
    }

    /// Parses `item (',' item)* ')'` or a lone `')'`. The opening parenthesis
    /// must already be consumed.
    pub(crate) fn parse_comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.peek_kind()? == TokenKind::RParen {
            self.next()?;
            return Ok(items);
        }

        loop {
            items.push(item(self)?);

            let token = self.next()?;
            match token.kind {
                TokenKind::Comma => {}
                TokenKind::RParen => break,
                _ => return Err(ParseError::unexpected_token(TokenKind::RParen, token)),
            }
        }
        Ok(items)
    }

    pub(crate) fn register_function(&mut self, definition: Rc<FunctionDefinition>) {
        log::debug!(
            "registering function {}({})",
            definition.name,
            definition.parameters.join(", ")
        );
        self.registry.register_function(definition);
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            while self.peek_kind()? == TokenKind::SemiColon {
                self.next()?;
            }
            if self.peek_kind()? == TokenKind::End {
                break;
            }

            statements.push(parse_statement(self)?);

            // A statement ends at ';' or at the end of the line
            let token = self.next()?;
            match token.kind {
                TokenKind::SemiColon => {}
                TokenKind::End => break,
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        expected: Expected::Token(TokenKind::SemiColon),
                        found: token,
                    })
                }
            }
        }

        Ok(Program { statements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexError;

    impl FunctionRegistry for Vec<Rc<FunctionDefinition>> {
        fn register_function(&mut self, definition: Rc<FunctionDefinition>) {
            self.push(definition);
        }
    }

    fn test_parsing(tests: Vec<(&str, &str)>) {
        for (input, expected) in tests {
            let mut registry: Vec<Rc<FunctionDefinition>> = Vec::new();
            let program = parse(input, &mut registry).unwrap();

            assert_eq!(program.to_string(), expected, "input: {input}")
        }
    }

    fn test_parse_errors(tests: Vec<(&str, ParseError)>) {
        for (input, expected) in tests {
            let mut registry: Vec<Rc<FunctionDefinition>> = Vec::new();
            let result = parse(input, &mut registry);

            assert_eq!(result, Err(expected), "input: {input}")
        }
    }

    fn token(kind: TokenKind, text: &str, start: usize) -> Token {
        Token {
            kind,
            text: text.into(),
            start,
            end: start + text.len(),
        }
    }

    #[test]
    fn test_expression_1() {
        let tests = vec![
            ("a + b + c", "((a + b) + c);\n"),
            ("a + b - c", "((a + b) - c);\n"),
            ("a * b * c", "((a * b) * c);\n"),
            ("a * b / c", "((a * b) / c);\n"),
            ("a + b / c", "(a + (b / c));\n"),
            (
                "a + b * c + d / e - f",
                "(((a + (b * c)) + (d / e)) - f);\n",
            ),
            ("3 + 4; 5 * 5", "(3 + 4);\n(5 * 5);\n"),
            ("10 - 3 - 2", "((10 - 3) - 2);\n"),
            ("-a * b", "((-a) * b);\n"),
            ("--2", "(-(-2));\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_expression_precedence() {
        let tests = vec![
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);\n"),
            ("(5 + 5) * 2", "((5 + 5) * 2);\n"),
            ("2 / (5 + 5)", "(2 / (5 + 5));\n"),
            ("-(5 + 5)", "(-(5 + 5));\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_assignment() {
        let tests = vec![
            ("x = 5", "x = 5;\n"),
            ("x = y = 1 + 2", "x = y = (1 + 2);\n"),
            ("x = 5; x + 1", "x = 5;\n(x + 1);\n"),
            ("2 * x = 3 + 1", "(2 * x = (3 + 1));\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_call_expression() {
        let tests = vec![
            ("a + add(b * c) + d", "((a + add((b * c))) + d);\n"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));\n",
            ),
            ("now()", "now();\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_statement_separators() {
        let tests = vec![
            ("", ""),
            (";;", ""),
            ("1;", "1;\n"),
            (";1;;2;", "1;\n2;\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_function() {
        let tests = vec![
            (
                "def add(a, b) { a + b }; add(2, 3)",
                "def add(a, b) { (a + b) };\nadd(2, 3);\n",
            ),
            ("def one() { 1 }", "def one() { 1 };\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_function_registered_while_parsing() {
        let mut registry: Vec<Rc<FunctionDefinition>> = Vec::new();
        let program = parse("def sq(x) { x * x }; sq(3)", &mut registry).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].name.as_ref(), "sq");
        assert_eq!(registry[0].parameters, vec![Rc::<str>::from("x")]);
        match &program.statements[0] {
            crate::ast::Expression::FunctionDef(definition) => {
                assert!(Rc::ptr_eq(definition, &registry[0]))
            }
            other => panic!("expected a function definition, got {other:?}"),
        }
    }

    #[test]
    fn test_definition_survives_later_parse_error() {
        let mut registry: Vec<Rc<FunctionDefinition>> = Vec::new();
        let result = parse("def one() { 1 }; (", &mut registry);

        assert!(result.is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_errors() {
        let tests = vec![
            (
                "(2 + 3",
                ParseError::PrematureEndOfInput {
                    expected: Expected::Token(TokenKind::RParen),
                },
            ),
            (
                "2 +",
                ParseError::PrematureEndOfInput {
                    expected: Expected::Expression,
                },
            ),
            (
                "2 + %",
                ParseError::Lex(LexError::UnexpectedCharacter {
                    character: '%',
                    position: 4,
                }),
            ),
            (
                "1 2",
                ParseError::UnexpectedToken {
                    expected: Expected::Token(TokenKind::SemiColon),
                    found: token(TokenKind::Number, "2", 2),
                },
            ),
            (
                "2 + )",
                ParseError::UnexpectedToken {
                    expected: Expected::Expression,
                    found: token(TokenKind::RParen, ")", 4),
                },
            ),
            (
                "f(1 2)",
                ParseError::UnexpectedToken {
                    expected: Expected::Token(TokenKind::RParen),
                    found: token(TokenKind::Number, "2", 4),
                },
            ),
            (
                "def (x) { x }",
                ParseError::UnexpectedToken {
                    expected: Expected::Token(TokenKind::Ident),
                    found: token(TokenKind::LParen, "(", 4),
                },
            ),
            (
                "def f(x) x",
                ParseError::UnexpectedToken {
                    expected: Expected::Token(TokenKind::LBrace),
                    found: token(TokenKind::Ident, "x", 9),
                },
            ),
            (
                "def f(x) { x",
                ParseError::PrematureEndOfInput {
                    expected: Expected::Token(TokenKind::RBrace),
                },
            ),
            (
                "def f(1) { 1 }",
                ParseError::UnexpectedToken {
                    expected: Expected::Token(TokenKind::Ident),
                    found: token(TokenKind::Number, "1", 6),
                },
            ),
            (
                "def f(x, x) { x }",
                ParseError::DuplicateParameter {
                    function: "f".into(),
                    parameter: "x".into(),
                },
            ),
            (
                "1 + def f() { 1 }",
                ParseError::UnexpectedToken {
                    expected: Expected::Expression,
                    found: token(TokenKind::Def, "def", 4),
                },
            ),
        ];

        test_parse_errors(tests)
    }

    #[test]
    fn test_number_out_of_range() {
        let literal = "9".repeat(400);
        let mut registry: Vec<Rc<FunctionDefinition>> = Vec::new();

        assert_eq!(
            parse(&literal, &mut registry),
            Err(ParseError::InvalidNumber(literal.as_str().into()))
        );
    }
}
