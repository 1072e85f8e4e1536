//! Rewrite rules for each kind of operator node.
//!
//! Each rule receives children that may not be simplified yet, and returns the canonical form of
//! the whole node. Leaves, negations, inverses and roots are handled directly by
//! [`eval`](crate::eval).

pub mod add;
pub mod distribute;
pub mod multiply;
pub mod power;

use formula_parser::{Kind, Node, Number};

/// Splits a simplified term into its numeric coefficient and its remaining factors, or returns
/// [`None`] if the term cannot appear in a sum.
///
/// - `5` -> `(5, [])`
/// - `3xy` -> `(3, [x, y])`
/// - `x^2` -> `(1, [x^2])`
pub(crate) fn split_term(term: &Node) -> Option<(Number, Vec<Node>)> {
    match &term.kind {
        Kind::Num(num) => Some((*num, Vec::new())),
        Kind::Mult => {
            let mut coefficient = Number::Int(1);
            let mut factors = Vec::new();
            for factor in &term.children {
                match factor.as_number() {
                    Some(num) => coefficient = coefficient * num,
                    None => factors.push(factor.clone()),
                }
            }
            Some((coefficient, factors))
        },
        Kind::Var(_) | Kind::Pow | Kind::Func(_) | Kind::Set(_) | Kind::Const(_) => {
            Some((Number::Int(1), vec![term.clone()]))
        },
        _ => None,
    }
}

/// Builds a term from its coefficient and factors. The coefficient is omitted if it is 1, and a
/// single factor is not wrapped in a product.
pub(crate) fn build_term(coefficient: Number, mut factors: Vec<Node>) -> Node {
    if factors.is_empty() {
        return Node::from(coefficient);
    }

    if !coefficient.is_one() {
        factors.insert(0, Node::from(coefficient));
    }

    if factors.len() == 1 {
        factors.remove(0)
    } else {
        Node::mult(factors)
    }
}

/// Returns the terms of a simplified expression: the children of a sum, or the expression
/// itself.
pub(crate) fn terms_of(expr: Node) -> Vec<Node> {
    if expr.is_add() {
        expr.children
    } else {
        vec![expr]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn split_product() {
        let term = Node::mult(vec![Node::num(3), Node::var('x'), Node::var('y')]);
        assert_eq!(
            split_term(&term),
            Some((Number::Int(3), vec![Node::var('x'), Node::var('y')])),
        );
    }

    #[test]
    fn split_rejects_sums() {
        assert_eq!(split_term(&Node::add(vec![Node::var('x'), Node::num(1)])), None);
    }

    #[test]
    fn build_omits_unit_coefficient() {
        assert_eq!(build_term(Number::Int(1), vec![Node::var('x')]), Node::var('x'));
        assert_eq!(build_term(Number::Int(4), Vec::new()), Node::num(4));
        assert_eq!(
            build_term(Number::Int(-1), vec![Node::var('x')]),
            Node::mult(vec![Node::num(-1), Node::var('x')]),
        );
    }
}
