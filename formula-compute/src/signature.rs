//! Canonical signatures used to recognize like terms and like bases.
//!
//! A signature is an s-expression of the node. The children of sums and products are sorted
//! first, so that `xy` and `yx` share a signature.

use formula_parser::{Kind, Node};

/// Returns the canonical signature of the node.
pub fn signature(node: &Node) -> String {
    match &node.kind {
        Kind::Num(num) => num.to_string(),
        Kind::Var(name) => name.to_string(),
        Kind::Func(content) | Kind::Set(content) | Kind::Const(content) => content.clone(),
        Kind::Add | Kind::Mult => format!("({} {})", node.name(), sorted(&node.children)),
        _ => {
            let children = node.children.iter().map(signature).collect::<Vec<_>>();
            format!("({} {})", node.name(), children.join(" "))
        },
    }
}

/// Returns the signature of a multiset of factors, independent of their order.
pub fn factors_signature(factors: &[Node]) -> String {
    sorted(factors)
}

fn sorted(nodes: &[Node]) -> String {
    let mut signatures = nodes.iter().map(signature).collect::<Vec<_>>();
    signatures.sort();
    signatures.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn order_independent() {
        let xy = Node::mult(vec![Node::var('x'), Node::var('y')]);
        let yx = Node::mult(vec![Node::var('y'), Node::var('x')]);
        assert_eq!(signature(&xy), signature(&yx));
        assert_eq!(signature(&xy), "(Mult x y)");
    }

    #[test]
    fn powers_keep_operand_order() {
        let x_y = Node::pow(Node::var('x'), Node::var('y'));
        let y_x = Node::pow(Node::var('y'), Node::var('x'));
        assert_ne!(signature(&x_y), signature(&y_x));
    }

    #[test]
    fn opaque_content() {
        let func = Node::leaf(Kind::Func(String::from("[sin x]")));
        assert_eq!(factors_signature(&[Node::var('x'), func]), "[sin x] x");
    }
}
