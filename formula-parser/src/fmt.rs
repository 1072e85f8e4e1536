//! Renders expression trees back to text.
//!
//! The output of a simplified tree compiles back to the same tree: sums are joined with `+`
//! (with `+ -` folded into `-` unless a function or set comes first), products use implicit multiplication, and parentheses are only
//! written around compound bases and exponents.

use crate::tree::{Kind, Node};
use std::fmt::{Display, Formatter, Result};

/// Renders the tree as text.
pub fn render(tree: &Node) -> String {
    tree.to_string()
}

/// Returns true if the node needs parentheses when it is a factor of a product.
fn wrap_factor(node: &Node) -> bool {
    match &node.kind {
        Kind::Add | Kind::Neg | Kind::Inv => true,
        Kind::Root { .. } => node.children.first().map_or(false, wrap_factor),
        _ => false,
    }
}

/// Returns true if the node needs parentheses when it is the base of a power.
fn wrap_base(node: &Node) -> bool {
    match &node.kind {
        Kind::Add | Kind::Neg | Kind::Inv | Kind::Mult | Kind::Pow => true,
        Kind::Num(num) => num.is_negative(),
        Kind::Root { .. } => node.children.first().map_or(false, wrap_base),
        _ => false,
    }
}

/// Returns true if the node needs parentheses when it is the exponent of a power. Powers nest
/// to the right, so a power exponent does not.
fn wrap_exponent(node: &Node) -> bool {
    match &node.kind {
        Kind::Add | Kind::Neg | Kind::Inv | Kind::Mult => true,
        Kind::Root { .. } => node.children.first().map_or(false, wrap_exponent),
        _ => false,
    }
}

/// Writes the node, wrapped in parentheses if `wrap` is true.
fn fmt_wrapped(f: &mut Formatter, node: &Node, wrap: bool) -> Result {
    if wrap {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

/// Formats the terms of a sum, writing `a + -b` as `a - b`.
///
/// After a function or set the `+` stays, since the tokenizer only fills in the `+` before a
/// `-` that follows an operand.
fn fmt_sum(terms: &[Node]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let text = term.to_string();
        if i > 0 {
            match text.strip_prefix('-') {
                Some(rest) if !out.ends_with([']', '}']) => {
                    out.push_str(" - ");
                    out.push_str(rest);
                    continue;
                },
                _ => out.push_str(" + "),
            }
        }
        out.push_str(&text);
    }
    out
}

/// Formats the factors of a product with implicit multiplication.
fn fmt_product(factors: &[Node]) -> String {
    let mut out = String::new();
    for (i, factor) in factors.iter().enumerate() {
        let last = i + 1 == factors.len();
        let text = match factor.as_number() {
            Some(num) if num.is_one() => continue,
            Some(num) if num.is_negative() && !out.is_empty() => format!("({})", num),
            Some(num) if num.to_f64() == -1.0 => String::from("-"),
            _ if wrap_factor(factor) => format!("({})", factor),
            // a negative exponent would swallow the factors after it
            _ if !last && matches!(factor.kind, Kind::Pow) && factor.to_string().contains("^-") => {
                format!("({})", factor)
            },
            _ => factor.to_string(),
        };

        // juxtaposition only means multiplication where the tokenizer would insert a `*`
        let glues_digits = out.ends_with(|c: char| c.is_ascii_digit() || c == '.')
            && text.starts_with(|c: char| c.is_ascii_digit() || c == '.');
        let after_bracket = out.ends_with([']', '}']);
        let before_set = !out.is_empty() && out != "-" && text.starts_with('{');
        if glues_digits || after_bracket || before_set {
            out.push('*');
        }

        out.push_str(&text);
    }
    out
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match &self.kind {
            Kind::Root { .. } => self.children.iter().try_for_each(|child| write!(f, "{}", child)),
            Kind::Add => write!(f, "{}", fmt_sum(&self.children)),
            Kind::Neg => {
                write!(f, "-")?;
                self.children.iter().try_for_each(|child| fmt_wrapped(f, child, wrap_base(child)))
            },
            Kind::Inv => {
                write!(f, "/")?;
                self.children.iter().try_for_each(|child| fmt_wrapped(f, child, wrap_base(child)))
            },
            Kind::Mult => write!(f, "{}", fmt_product(&self.children)),
            Kind::Pow => {
                let mut children = self.children.iter();
                if let Some(base) = children.next() {
                    fmt_wrapped(f, base, wrap_base(base))?;
                }
                write!(f, "^")?;
                if let Some(exponent) = children.next() {
                    fmt_wrapped(f, exponent, wrap_exponent(exponent))?;
                }
                Ok(())
            },
            Kind::Num(num) => write!(f, "{}", num),
            Kind::Var(name) => write!(f, "{}", name),
            Kind::Func(content) | Kind::Set(content) | Kind::Const(content) => write!(f, "{}", content),
        }
    }
}
