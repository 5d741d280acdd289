use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Ident,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,

    Comma,
    SemiColon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Def,

    End,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Rc<str>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

fn keywords(ident: &str) -> Option<TokenKind> {
    match ident {
        "def" => Some(TokenKind::Def),
        _ => None,
    }
}

/// Produces tokens lazily from a single line of source text.
///
/// Once the input is exhausted every further call to [`Tokenizer::next_token`]
/// returns an `End` token.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self {
            input,
            iter,
            finished: false,
        }
    }

    fn is_ident_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while self
            .iter
            .next_if(|(_, ch)| ch.is_ascii_whitespace())
            .is_some()
        {}

        let Some((idx, ch)) = self.iter.next() else {
            let end = self.input.len();
            return Ok(Token {
                kind: TokenKind::End,
                text: "".into(),
                start: end,
                end,
            });
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Assign,
            ',' => TokenKind::Comma,
            ';' => TokenKind::SemiColon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            c if c.is_ascii_alphabetic() => return Ok(self.read_identifier(idx)),
            c if c.is_ascii_digit() => return Ok(self.read_number(idx)),
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    position: idx,
                })
            }
        };

        Ok(self.token(kind, idx))
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_ident_char(*ch)).is_some() {}

        let end = self.next_idx();
        let ident = &self.input[start..end];
        self.token(keywords(ident).unwrap_or(TokenKind::Ident), start)
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        self.token(TokenKind::Number, start)
    }

    fn token(&mut self, kind: TokenKind, start: usize) -> Token {
        let end = self.next_idx();
        Token {
            kind,
            text: self.input[start..end].into(),
            start,
            end,
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

/// Yields every token up to and including `End`, or up to the first error.
impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = !matches!(&result, Ok(token) if token.kind != TokenKind::End);
        Some(result)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;
        let description = match self {
            Number => "number",
            Ident => "identifier",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Assign => "'='",
            Comma => "','",
            SemiColon => "';'",
            LParen => "'('",
            RParen => "')'",
            LBrace => "'{'",
            RBrace => "'}'",
            Def => "'def'",
            End => "end of input",
        };
        write!(f, "{}", description)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "end of input"),
            _ => write!(f, "'{}' at position {}", self.text, self.start),
        }
    }
}
