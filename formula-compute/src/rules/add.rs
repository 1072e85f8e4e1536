//! Collection of like terms.

use crate::{error::{UndefinedResult, UnrecognizedTerm}, eval, signature::factors_signature};
use formula_error::Error;
use formula_parser::{Node, Number};
use std::collections::HashMap;
use super::{build_term, split_term};

/// A group of like terms: terms whose non-numeric factors are the same.
struct LikeTerms {
    coefficient: Number,
    factors: Vec<Node>,
}

/// Simplifies a sum of the given terms.
///
/// `x + 2 + 3x = 4x + 2`
///
/// Nested sums are flattened, terms with the same factors are combined by summing their
/// coefficients, and terms whose coefficient sums to zero are dropped. Groups keep the order in
/// which their first term appeared. A coefficient that overflows is an [`UndefinedResult`].
///
/// Every simplified term can be split into a coefficient and factors, so [`UnrecognizedTerm`]
/// is never raised for trees built by `compile`.
pub fn add(terms: &[Node]) -> Result<Node, Error> {
    let mut groups: Vec<LikeTerms> = Vec::new();
    let mut index = HashMap::new();

    for term in terms {
        let term = eval(term)?;
        for term in super::terms_of(term) {
            let (coefficient, factors) = split_term(&term)
                .ok_or_else(|| Error::unspanned(UnrecognizedTerm { term: term.to_string() }))?;

            let key = factors_signature(&factors);
            match index.get(&key) {
                Some(&i) => {
                    let group: &mut LikeTerms = &mut groups[i];
                    group.coefficient = group.coefficient + coefficient;
                },
                None => {
                    index.insert(key, groups.len());
                    groups.push(LikeTerms { coefficient, factors });
                },
            }
        }
    }

    let mut new_terms = Vec::new();
    for LikeTerms { coefficient, factors } in groups {
        if !coefficient.is_finite() {
            return Err(Error::unspanned(UndefinedResult {
                expression: build_term(coefficient, factors).to_string(),
            }));
        }
        if !coefficient.is_zero() {
            new_terms.push(build_term(coefficient, factors));
        }
    }

    Ok(match new_terms.len() {
        0 => Node::num(0),
        1 => new_terms.remove(0),
        _ => Node::add(new_terms),
    })
}
