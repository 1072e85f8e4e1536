//! Combination of like factors.

use crate::{error::UndefinedResult, eval, signature::signature};
use formula_error::Error;
use formula_parser::{Kind, Node, Number};
use std::collections::HashMap;
use super::{distribute, power::power};

/// A base together with the sum of the exponents it appears with.
struct LikeFactors {
    base: Node,
    exponent: Node,
}

/// Simplifies a product of the given factors.
///
/// `2x * 3x^2 = 6x^3`
///
/// If any factor simplifies to a sum, the product is expanded into a sum instead. Otherwise
/// nested products are flattened, numbers are multiplied into a single coefficient, and factors
/// with the same base are combined by adding their exponents. The coefficient comes first and is
/// omitted if it is 1.
pub fn multiply(factors: &[Node]) -> Result<Node, Error> {
    let factors = factors.iter()
        .map(eval)
        .collect::<Result<Vec<_>, _>>()?;

    if factors.iter().any(Node::is_add) {
        return distribute::expand_product(factors);
    }

    let mut coefficient = Number::Int(1);
    let mut groups: Vec<LikeFactors> = Vec::new();
    let mut index = HashMap::new();

    for (base, exponent) in flatten(factors) {
        if let Some(num) = base.as_number().filter(|_| exponent.is_one()) {
            coefficient = coefficient * num;
            continue;
        }

        let key = signature(&base);
        match index.get(&key) {
            Some(&i) => {
                let group: &mut LikeFactors = &mut groups[i];
                group.exponent = add_exponents(&group.exponent, &exponent)?;
            },
            None => {
                index.insert(key, groups.len());
                groups.push(LikeFactors { base, exponent });
            },
        }
    }

    let mut new_factors = Vec::new();
    for LikeFactors { base, exponent } in groups {
        let factor = if exponent.is_one() { base } else { power(base, exponent)? };
        match factor.as_number() {
            Some(num) => coefficient = coefficient * num,
            None => new_factors.push(factor),
        }
    }

    if !coefficient.is_finite() {
        return Err(Error::unspanned(UndefinedResult {
            expression: super::build_term(coefficient, new_factors).to_string(),
        }));
    }

    if coefficient.is_zero() {
        return Ok(Node::num(0));
    }

    // raising a sum to a power may have produced a sum that still needs to be distributed
    if new_factors.iter().any(|factor| matches!(factor.kind, Kind::Add | Kind::Mult)) {
        new_factors.insert(0, Node::from(coefficient));
        return eval(&Node::mult(new_factors));
    }

    Ok(super::build_term(coefficient, new_factors))
}

/// Splits simplified factors into `(base, exponent)` pairs, flattening nested products. A factor
/// that is not a power has an exponent of 1.
fn flatten(factors: Vec<Node>) -> Vec<(Node, Node)> {
    let mut pairs = Vec::new();
    for factor in factors {
        match factor.kind {
            Kind::Mult => pairs.extend(flatten(factor.children)),
            Kind::Pow => match <[Node; 2]>::try_from(factor.children) {
                Ok([base, exponent]) => pairs.push((base, exponent)),
                Err(children) => pairs.push((Node::new(Kind::Pow, children), Node::num(1))),
            },
            _ => pairs.push((factor, Node::num(1))),
        }
    }
    pairs
}

/// Adds two exponents of the same base.
fn add_exponents(lhs: &Node, rhs: &Node) -> Result<Node, Error> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(lhs), Some(rhs)) => Ok(Node::from(lhs + rhs)),
        _ => eval(&Node::add(vec![lhs.clone(), rhs.clone()])),
    }
}

#[cfg(test)]
mod tests {
    use formula_parser::compile;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(input: &str) -> String {
        crate::simplify(&compile(input).unwrap()).unwrap().to_string()
    }

    #[test]
    fn fold_numbers() {
        assert_eq!(simplified("2*3*4"), "24");
        assert_eq!(simplified("2 3"), "23");
        assert_eq!(simplified("2 (3)"), "6");
        assert_eq!(simplified("0.5 * 4"), "2");
    }

    #[test]
    fn combine_like_factors() {
        assert_eq!(simplified("x*x"), "x^2");
        assert_eq!(simplified("2x * 3x^2"), "6x^3");
        assert_eq!(simplified("xyx"), "x^2y");
        assert_eq!(simplified("x^a x^b"), "x^(a + b)");
        assert_eq!(simplified("x^0.5 x^0.5"), "x");
    }

    #[test]
    fn cancelled_factors() {
        assert_eq!(simplified("x/x"), "1");
        assert_eq!(simplified("2x/x"), "2");
        assert_eq!(simplified("x^2/x"), "x");
    }

    #[test]
    fn zero_coefficient() {
        assert_eq!(simplified("0x"), "0");
        assert_eq!(simplified("x * 0 * y"), "0");
    }

    #[test]
    fn negative_coefficient() {
        assert_eq!(simplified("-2x * 3"), "-6x");
        assert_eq!(simplified("-x * -y"), "xy");
    }

    #[test]
    fn overflow_to_float() {
        let product = compile("3037000500 * 3037000500").unwrap();
        let result = crate::simplify(&product).unwrap();
        assert!(result.as_number().map_or(false, |num| matches!(num, Number::Float(_))));
    }
}
