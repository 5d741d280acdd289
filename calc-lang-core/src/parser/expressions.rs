use std::rc::Rc;

use super::error::{Expected, ParseError};
use crate::ast::{BinaryOperator, Expression};
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;

type OperandParser = fn(&mut Parser) -> Result<Expression, ParseError>;

fn additive_operator(token: TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Subtract),
        _ => None,
    }
}

fn multiplicative_operator(token: TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Star => Some(BinaryOperator::Multiply),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        _ => None,
    }
}

/// `expression := term (('+' | '-') term)*`
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parse_left_associative(parser, parse_term, additive_operator)
}

/// `term := factor (('*' | '/') factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expression, ParseError> {
    parse_left_associative(parser, parse_factor, multiplicative_operator)
}

fn parse_left_associative(
    parser: &mut Parser,
    operand: OperandParser,
    operator_of: fn(TokenKind) -> Option<BinaryOperator>,
) -> Result<Expression, ParseError> {
    let mut left_expression = operand(parser)?;

    while let Some(operator) = operator_of(parser.peek_kind()?) {
        parser.next()?;
        let right_expression = operand(parser)?;
        left_expression =
            Expression::Binary(operator, Box::new(left_expression), Box::new(right_expression));
    }

    Ok(left_expression)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.next()?;
    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::Minus => Ok(Expression::Negate(Box::new(parse_factor(parser)?))),
        TokenKind::Ident => parse_identifier_expression(token.text, parser),
        TokenKind::LParen => {
            let expression = parse_expression(parser)?;
            parser.expect_token(TokenKind::RParen)?;
            Ok(expression)
        }
        _ => Err(ParseError::unexpected(Expected::Expression, token)),
    }
}

fn parse_number(token: Token) -> Result<Expression, ParseError> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expression::Number(value)),
        _ => Err(ParseError::InvalidNumber(token.text)),
    }
}

fn parse_identifier_expression(name: Rc<str>, parser: &mut Parser) -> Result<Expression, ParseError> {
    match parser.peek_kind()? {
        TokenKind::LParen => {
            parser.next()?;
            let arguments = parser.parse_comma_separated(parse_expression)?;
            Ok(Expression::Call { name, arguments })
        }
        TokenKind::Assign => {
            parser.next()?;
            let value = parse_expression(parser)?;
            Ok(Expression::Assignment {
                name,
                value: Box::new(value),
            })
        }
        _ => Ok(Expression::Variable(name)),
    }
}
