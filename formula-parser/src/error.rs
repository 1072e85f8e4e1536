//! Kinds of errors raised while lexing, tokenizing and building expression trees.

use ariadne::Fmt;
use formula_attrs::ErrorKind;
use formula_error::{ErrorKind, EXPR};

/// A character that is not a digit, letter, operator, bracket or whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Lex,
    message = format!("unrecognized character `{}`", found),
    labels = ["this character is not allowed"],
    help = format!(
        "only digits, letters, the operators {} and the brackets {} are allowed",
        "+ - * / ^".fg(EXPR),
        "() [] {} \\\\".fg(EXPR),
    ),
)]
pub struct UnrecognizedChar {
    /// The offending character.
    pub found: char,
}

/// A closing bracket without a matching opening bracket.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("unmatched closing bracket `{}`", found),
    labels = ["this bracket was never opened"],
    help = "add an opening bracket somewhere before this",
)]
pub struct UnmatchedBracket {
    /// The closing bracket that was found.
    pub found: char,
}

/// An opening bracket that is never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("unclosed bracket `{}`", opening),
    labels = ["this bracket is not closed"],
    help = format!("add a closing {} somewhere after this", format!("`{}`", closing).fg(EXPR)),
)]
pub struct UnclosedBracket {
    /// The opening bracket.
    pub opening: char,

    /// The bracket that would close it.
    pub closing: char,
}

/// A lexical item that does not correspond to any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("unrecognized term `{}`", item),
    labels = ["I could not understand this"],
)]
pub struct UnrecognizedItem {
    /// The text of the item.
    pub item: String,
}

/// A run of digits and decimal points that is not a valid number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("invalid number `{}`", literal),
    labels = ["this is not a number"],
    help = "a number can contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The literal that failed to parse.
    pub literal: String,
}

/// There was nothing inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyGroup;

/// The source contained no expression at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(category = Token, message = "empty expression")]
pub struct EmptyExpression;

/// An operator did not receive all of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("missing operand for `{}`", operator),
    labels = [format!("this operator needs {} more {}", missing, "operand".fg(EXPR))],
)]
pub struct MissingOperand {
    /// The operator's display name.
    pub operator: &'static str,

    /// How many operands are missing.
    pub missing: usize,
}

/// A node was given more children than its declared arity allows.
///
/// The tree builder never attaches to a full node unless two operands are juxtaposed with no
/// operator between them that the tokenizer would fill in, such as `[f]x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Math,
    message = format!("`{}` cannot take more than {} operand(s)", node, arity),
    labels = ["this has nothing to attach to"],
    help = format!("try adding an explicit {} here", "*".fg(EXPR)),
)]
pub struct ArityExceeded {
    /// The display name of the full node.
    pub node: &'static str,

    /// The declared arity of the full node.
    pub arity: usize,
}
