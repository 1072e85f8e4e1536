//! Turns infix formulas such as `2x^2 - 3(x + 1)` into expression trees, and renders expression
//! trees back to text.
//!
//! The pipeline is split into stages, each consuming only the output of the previous one:
//!
//! 1. [`lexer`]: text to lexical items (numbers, letters, operators and bracket groups).
//! 2. [`tokenizer`]: lexical items to typed tokens, with implicit operators inserted.
//! 3. [`builder`]: tokens to a single [`Node`] tree, by precedence-order insertion.
//!
//! The tree is simplified by the `formula-compute` crate, and rendered with [`render`].

pub mod builder;
pub mod error;
pub mod fmt;
pub mod lexer;
pub mod tokenizer;
pub mod tree;

use builder::Arena;
pub use formula_error::Error;
pub use fmt::render;
use tokenizer::Token;
pub use tree::{Kind, Node, Number};

/// Compiles the given source into an expression tree.
///
/// Fails with a lex error if the source contains a character that is not a digit, letter,
/// operator, bracket or whitespace, and with a token error if the tokens cannot be arranged
/// into a tree.
pub fn compile(input: &str) -> Result<Node, Error> {
    compile_tokens(tokenizer::tokenize(input)?)
}

/// Compiles an already-tokenized sequence into an expression tree.
pub fn compile_tokens(tokens: Vec<Token>) -> Result<Node, Error> {
    Arena::new().build(tokens)
}
