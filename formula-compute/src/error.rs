//! Kinds of errors raised while simplifying expression trees.
//!
//! Simplification works on finished trees, so these errors carry no spans.

use ariadne::Fmt;
use formula_attrs::ErrorKind;
use formula_error::{ErrorKind, EXPR};

/// A term of a sum that is not a number, variable, product, power, function, set or constant.
///
/// Simplified terms always have one of these forms, so this is only a guard for terms that
/// cannot be split into a coefficient and factors; it is not raised for trees built by
/// `formula_parser::compile`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Math,
    message = format!("unrecognized term `{}`", term),
    labels = ["in this expression"],
)]
pub struct UnrecognizedTerm {
    /// The rendered term.
    pub term: String,
}

/// Zero was raised to a zero or negative power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Math,
    message = "division by zero",
    labels = ["in this expression"],
    help = format!("{} is undefined for exponents of zero or less", "0^n".fg(EXPR)),
)]
pub struct DivisionByZero;

/// A numeric result that is not a finite real number, such as `(-8)^0.5`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Math,
    message = format!("`{}` does not have a finite real value", expression),
    labels = ["in this expression"],
)]
pub struct UndefinedResult {
    /// The rendered expression that produced the value.
    pub expression: String,
}

/// A node with the wrong number of children, which can only come from a hand-built tree.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Math,
    message = format!("`{}` node has {} operand(s), expected {}", node, found, expected),
    labels = ["in this expression"],
)]
pub struct MalformedNode {
    /// The display name of the node.
    pub node: &'static str,

    /// The number of children the node requires.
    pub expected: usize,

    /// The number of children the node has.
    pub found: usize,
}
