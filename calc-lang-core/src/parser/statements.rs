use std::collections::HashSet;
use std::rc::Rc;

use crate::ast::{Expression, FunctionDefinition};
use crate::lexer::TokenKind;
use crate::parser::expressions::parse_expression;
use crate::parser::{ParseError, Parser};

pub fn parse_statement(parser: &mut Parser) -> Result<Expression, ParseError> {
    match parser.peek_kind()? {
        TokenKind::Def => Ok(Expression::FunctionDef(parse_function_definition(parser)?)),
        _ => parse_expression(parser),
    }
}

/// `def IDENT '(' params ')' '{' expression '}'`
///
/// The definition is handed to the registry before this returns, so it is
/// callable from every statement parsed after it.
fn parse_function_definition(
    parser: &mut Parser,
) -> Result<Rc<FunctionDefinition>, ParseError> {
    parser.expect_token(TokenKind::Def)?;
    let name = parser.parse_ident()?;
    parser.expect_token(TokenKind::LParen)?;
    let parameters = parser.parse_comma_separated(|parser| parser.parse_ident())?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = parameters.iter().find(|parameter| !seen.insert(*parameter)) {
        return Err(ParseError::DuplicateParameter {
            function: name,
            parameter: duplicate.clone(),
        });
    }

    parser.expect_token(TokenKind::LBrace)?;
    let body = parse_expression(parser)?;
    parser.expect_token(TokenKind::RBrace)?;

    let definition = Rc::new(FunctionDefinition {
        name,
        parameters,
        body,
    });
    parser.register_function(definition.clone());
    Ok(definition)
}
