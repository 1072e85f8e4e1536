//! Algebraic simplification of expression trees built by `formula-parser`.
//!
//! [`simplify`] rewrites a tree into its canonical form: numbers are folded, like terms and like
//! factors are collected, products of sums are expanded, and exponent laws are applied. The
//! input tree is never modified; every rule builds a new tree.
//!
//! ```
//! use formula_compute::simplify;
//! use formula_parser::{compile, render};
//!
//! let tree = compile("2x(x + 3) - x^2").unwrap();
//! assert_eq!(render(&simplify(&tree).unwrap()), "x^2 + 6x");
//! ```

pub mod error;
mod rules;
mod signature;

use error::MalformedNode;
use formula_error::Error;
use formula_parser::{Kind, Node};

/// Simplifies the tree into its canonical form.
///
/// Simplifying a canonical tree returns the same tree.
pub fn simplify(tree: &Node) -> Result<Node, Error> {
    eval(tree)
}

/// Rewrites a single node, evaluating its children as each rule requires.
pub(crate) fn eval(node: &Node) -> Result<Node, Error> {
    check_arity(node)?;

    match &node.kind {
        Kind::Root { .. } => eval(&node.children[0]),
        Kind::Add => rules::add::add(&node.children),
        Kind::Neg => eval(&Node::mult(vec![Node::num(-1), node.children[0].clone()])),
        Kind::Mult => rules::multiply::multiply(&node.children),
        Kind::Inv => eval(&Node::pow(node.children[0].clone(), Node::num(-1))),
        Kind::Pow => {
            let base = eval(&node.children[0])?;
            let exponent = eval(&node.children[1])?;
            rules::power::power(base, exponent)
        },
        Kind::Num(_) | Kind::Var(_) | Kind::Func(_) | Kind::Set(_) | Kind::Const(_) => {
            Ok(node.clone())
        },
    }
}

/// Checks that a node with a fixed number of operands has exactly that many children. Sums and
/// products accept any number of children.
fn check_arity(node: &Node) -> Result<(), Error> {
    if matches!(node.kind, Kind::Add | Kind::Mult) {
        return Ok(());
    }

    let expected = node.kind.arity();
    if node.children.len() == expected {
        Ok(())
    } else {
        Err(Error::unspanned(MalformedNode {
            node: node.name(),
            expected,
            found: node.children.len(),
        }))
    }
}
