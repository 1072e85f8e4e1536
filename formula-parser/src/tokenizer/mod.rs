//! Turns lexical items into [`Token`]s.
//!
//! Besides tagging each item with the node variant it becomes, the tokenizer fills in the
//! operators that juxtaposition implies. Only the previous token is consulted: after an operand
//! (a number, constant, variable or parenthesized group),
//!
//! - another operand or a function application gets an implicit `*` (`2x`, `x(y + 1)`),
//! - a negation gets an implicit `+`, so that `a-b` becomes `a + -b`,
//! - an inverse gets an implicit `*`, so that `a/b` becomes `a * /b`.
//!
//! After an operator nothing is inserted, which is what lets `-` and `/` act as unary operators
//! there (`2^-1`).

pub mod token;

use crate::{
    error::{EmptyGroup, InvalidNumber, UnrecognizedItem},
    lexer::{lex_at, Bracket, Item, ItemKind},
    tree::Number,
};
use formula_error::Error;
pub use token::{Token, TokenKind};

/// Lexes and tokenizes the given source.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    tokenize_items(&crate::lexer::lex(input)?)
}

/// Tokenizes the given lexical items, recursing into parenthesized groups.
pub fn tokenize_items(items: &[Item]) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();

    for item in items {
        let token = match item.kind {
            ItemKind::Group(Bracket::Round) => {
                let inner = lex_at(item.inner(), item.span.start + 1)?;
                if inner.is_empty() {
                    return Err(Error::new(vec![item.span.clone()], EmptyGroup));
                }
                Token::Group {
                    tokens: tokenize_items(&inner)?,
                    span: item.span.clone(),
                }
            },
            ItemKind::Group(Bracket::Square) => leaf(item, TokenKind::Func),
            ItemKind::Group(Bracket::Curly) => leaf(item, TokenKind::Set),
            ItemKind::Group(Bracket::Backslash) => leaf(item, TokenKind::Const),
            ItemKind::Operator => {
                let kind = item.lexeme.chars()
                    .next()
                    .and_then(TokenKind::from_operator)
                    .ok_or_else(|| unrecognized(item))?;
                leaf(item, kind)
            },
            ItemKind::Letter => leaf(item, TokenKind::Var),
            ItemKind::Number => {
                let literal = item.lexeme.split_whitespace().collect::<String>();
                if Number::parse(&literal).is_none() {
                    return Err(Error::new(vec![item.span.clone()], InvalidNumber { literal }));
                }
                Token::Leaf {
                    kind: TokenKind::Num,
                    content: literal,
                    span: item.span.clone(),
                }
            },
        };

        push(&mut tokens, token);
    }

    Ok(tokens)
}

/// Appends a token, inserting the operator implied by juxtaposition with the previous token.
fn push(tokens: &mut Vec<Token>, token: Token) {
    if tokens.last().map_or(false, Token::is_operand) {
        let implicit = match token.kind() {
            Some(TokenKind::Neg) => Some((TokenKind::Add, "+")),
            Some(TokenKind::Inv | TokenKind::Func) => Some((TokenKind::Mult, "*")),
            _ if token.is_operand() => Some((TokenKind::Mult, "*")),
            _ => None,
        };

        if let Some((kind, content)) = implicit {
            let at = token.span().start;
            tokens.push(Token::Leaf { kind, content: content.to_string(), span: at..at });
        }
    }

    tokens.push(token);
}

/// Creates a leaf token from a lexical item.
fn leaf(item: &Item, kind: TokenKind) -> Token {
    Token::Leaf {
        kind,
        content: item.lexeme.to_string(),
        span: item.span.clone(),
    }
}

/// Creates the error for an item that has no token.
fn unrecognized(item: &Item) -> Error {
    Error::new(vec![item.span.clone()], UnrecognizedItem { item: item.lexeme.to_string() })
}
