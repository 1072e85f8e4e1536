//! Expansion of products and powers of sums.

use crate::eval;
use formula_error::Error;
use formula_parser::Node;
use super::terms_of;

/// Sums raised to a larger power are left unexpanded. Below this, the size of the expansion still
/// grows combinatorially with the number of terms in the sum.
pub const MAX_EXPANDED_POWER: i64 = 64;

/// Expands a product of simplified factors, at least one of which is a sum.
///
/// `2(x + 1)(x - 1) = 2x^2 - 2`
///
/// The factors that are not sums are multiplied together first. The result is then multiplied
/// by each sum in turn, pairing every term of the running result with every term of the sum.
pub fn expand_product(factors: Vec<Node>) -> Result<Node, Error> {
    let (sums, scalars): (Vec<_>, Vec<_>) = factors.into_iter().partition(Node::is_add);

    let mut expanded = if scalars.is_empty() {
        Node::num(1)
    } else {
        eval(&Node::mult(scalars))?
    };

    for sum in sums {
        expanded = multiply_terms(expanded, sum)?;
    }

    Ok(expanded)
}

/// Expands a sum raised to a positive integer power by repeated multiplication.
///
/// `(x + 1)^2 = x^2 + 2x + 1`
///
/// Each step multiplies the running result by the whole sum, so the cost follows the number of
/// distinct terms of the result.
pub fn expand_power(sum: &Node, exponent: i64) -> Result<Node, Error> {
    let mut expanded = sum.clone();
    for _ in 1..exponent {
        expanded = multiply_terms(expanded, sum.clone())?;
    }
    Ok(expanded)
}

/// Multiplies every term of `lhs` by every term of `rhs`, and simplifies the resulting sum.
fn multiply_terms(lhs: Node, rhs: Node) -> Result<Node, Error> {
    let rhs = terms_of(rhs);
    let products = terms_of(lhs)
        .into_iter()
        .flat_map(|lhs| rhs.iter().map(move |rhs| Node::mult(vec![lhs.clone(), rhs.clone()])))
        .collect::<Vec<_>>();

    eval(&Node::add(products))
}

#[cfg(test)]
mod tests {
    use formula_parser::compile;
    use pretty_assertions::assert_eq;

    fn simplified(input: &str) -> String {
        crate::simplify(&compile(input).unwrap()).unwrap().to_string()
    }

    #[test]
    fn distribute_scalar() {
        assert_eq!(simplified("2*(3+4)"), "14");
        assert_eq!(simplified("2(x + 1)"), "2x + 2");
        assert_eq!(simplified("x(x - y)"), "x^2 - xy");
    }

    #[test]
    fn multiply_sums() {
        assert_eq!(simplified("(x + 1)(x - 1)"), "x^2 - 1");
        assert_eq!(simplified("2(x + 1)(x - 1)"), "2x^2 - 2");
        assert_eq!(simplified("(a + b)(c + d)"), "ac + ad + bc + bd");
    }

    #[test]
    fn three_sums() {
        assert_eq!(simplified("(x + 1)(x + 1)(x + 1)"), "x^3 + 3x^2 + 3x + 1");
    }

    #[test]
    fn power_of_sum() {
        assert_eq!(simplified("(x + 1)^2"), "x^2 + 2x + 1");
        assert_eq!(simplified("(x - y)^2"), "x^2 - 2xy + y^2");
    }

    #[test]
    fn large_power_of_sum_is_kept() {
        assert_eq!(simplified("(x + 1)^100"), "(x + 1)^100");
        assert_eq!(simplified("(x + 1)^65"), "(x + 1)^65");

        let expanded = crate::simplify(&compile("(x + 1)^64").unwrap()).unwrap();
        assert!(expanded.is_add());
        assert_eq!(expanded.children.len(), 65);
    }
}
