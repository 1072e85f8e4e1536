//! Exponent laws.

use crate::{error::{DivisionByZero, UndefinedResult}, eval};
use formula_error::Error;
use formula_parser::{Kind, Node};
use super::distribute::{expand_power, MAX_EXPANDED_POWER};

/// Simplifies `base^exponent`, where both operands are already simplified.
///
/// - `2^3 = 8`
/// - `1^x = 1`, `0^x = 0`
/// - `x^0 = 1`, `x^1 = x`
/// - `(x^a)^b = x^(ab)`
/// - `(xy)^a = x^a * y^a`
/// - `(x + 1)^2 = x^2 + 2x + 1`, for integer exponents up to [`MAX_EXPANDED_POWER`]
///
/// Expanding a sum of `k` terms to the power `n` produces up to `C(n + k - 1, k - 1)` terms, so
/// the output grows combinatorially: `(a + b + c + d + e + f)^64` has millions of terms.
pub fn power(base: Node, exponent: Node) -> Result<Node, Error> {
    if let (Some(b), Some(e)) = (base.as_number(), exponent.as_number()) {
        if b.is_zero() && (e.is_zero() || e.is_negative()) {
            return Err(Error::unspanned(DivisionByZero));
        }

        let result = b.pow(e);
        if !result.is_finite() {
            return Err(Error::unspanned(UndefinedResult {
                expression: Node::pow(base, exponent).to_string(),
            }));
        }
        return Ok(Node::from(result));
    }

    if base.as_number().map_or(false, |b| b.is_zero() || b.is_one()) {
        return Ok(base);
    }

    if let Some(e) = exponent.as_number() {
        if e.is_zero() {
            return Ok(Node::num(1));
        }
        if e.is_one() {
            return Ok(base);
        }
    }

    match base.kind {
        Kind::Pow => match <[Node; 2]>::try_from(base.children) {
            Ok([inner_base, inner_exponent]) => {
                let exponent = eval(&Node::mult(vec![inner_exponent, exponent]))?;
                power(inner_base, exponent)
            },
            Err(children) => Ok(Node::pow(Node::new(Kind::Pow, children), exponent)),
        },
        Kind::Mult => {
            let factors = base.children.into_iter()
                .map(|factor| Node::pow(factor, exponent.clone()))
                .collect();
            eval(&Node::mult(factors))
        },
        Kind::Add => match exponent.as_number().and_then(|e| e.as_int()) {
            Some(n) if n > 1 && n <= MAX_EXPANDED_POWER => expand_power(&base, n),
            _ => Ok(Node::pow(base, exponent)),
        },
        _ => Ok(Node::pow(base, exponent)),
    }
}

#[cfg(test)]
mod tests {
    use formula_error::Category;
    use formula_parser::compile;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(input: &str) -> Result<String, Error> {
        crate::simplify(&compile(input)?).map(|tree| tree.to_string())
    }

    #[test]
    fn fold_numbers() {
        assert_eq!(simplified("2^3").unwrap(), "8");
        assert_eq!(simplified("2^-1").unwrap(), "0.5");
        assert_eq!(simplified("4^0.5").unwrap(), "2");
        assert_eq!(simplified("2^3^2").unwrap(), "512");
        assert_eq!(simplified("0^2").unwrap(), "0");
    }

    #[test]
    fn zero_and_one_bases() {
        assert_eq!(simplified("1^x").unwrap(), "1");
        assert_eq!(simplified("0^x").unwrap(), "0");
    }

    #[test]
    fn zero_and_one_exponents() {
        assert_eq!(simplified("x^0").unwrap(), "1");
        assert_eq!(simplified("x^1").unwrap(), "x");
        assert_eq!(simplified("x^(y - y)").unwrap(), "1");
    }

    #[test]
    fn power_of_power() {
        assert_eq!(simplified("(x^2)^3").unwrap(), "x^6");
        assert_eq!(simplified("(x^2)^0.5").unwrap(), "x");
        assert_eq!(simplified("(x^a)^b").unwrap(), "x^(ab)");
    }

    #[test]
    fn power_of_product() {
        assert_eq!(simplified("(2x)^2").unwrap(), "4x^2");
        assert_eq!(simplified("(xy)^a").unwrap(), "x^ay^a");
    }

    #[test]
    fn symbolic_exponents_are_kept() {
        assert_eq!(simplified("2^x").unwrap(), "2^x");
        assert_eq!(simplified("(x + 1)^y").unwrap(), "(x + 1)^y");
        assert_eq!(simplified("(x + 1)^0.5").unwrap(), "(x + 1)^0.5");
    }

    #[test]
    fn division_by_zero() {
        for input in ["0^-1", "0^0", "1/0", "x/0"] {
            let err = simplified(input).unwrap_err();
            assert_eq!(err.category(), Category::Math);
            assert!(err.is::<DivisionByZero>(), "{input}");
        }
    }

    #[test]
    fn undefined_result() {
        let err = simplified("(-8)^0.5").unwrap_err();
        assert!(err.is::<UndefinedResult>());
    }
}
