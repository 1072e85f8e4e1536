use crate::tree::Kind;

/// The precedence of a node variant during tree building. Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The outermost root, which accepts anything.
    Root,

    /// Addition and negation.
    Term,

    /// Multiplication and inversion.
    Factor,

    /// Exponentiation.
    Exp,

    /// Numbers, variables, bracket groups, and nested roots.
    Atom,
}

impl Kind {
    /// Returns the precedence of the variant.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Root { main: true } => Precedence::Root,
            Self::Add | Self::Neg => Precedence::Term,
            Self::Mult | Self::Inv => Precedence::Factor,
            Self::Pow => Precedence::Exp,
            Self::Root { main: false }
                | Self::Num(_)
                | Self::Var(_)
                | Self::Func(_)
                | Self::Set(_)
                | Self::Const(_) => Precedence::Atom,
        }
    }

    /// Returns true if the variant is a unary operator.
    pub fn is_unary(&self) -> bool {
        matches!(self, Self::Neg | Self::Inv)
    }

    /// Returns true if a node of this variant, already in the tree, binds tighter than the
    /// incoming `new` node. The tree builder skips past such nodes while looking for the place
    /// to insert `new`.
    ///
    /// - The outermost root never binds tighter than anything.
    /// - Among atoms, only numbers, variables and constants are skipped over; a nested root or a
    ///   bracket group accepts the atom (and then rejects it, being full).
    /// - Between operators of different precedence, the higher precedence wins.
    /// - Within one family, a unary operator binds tighter than the binary operator, so `-a+b`
    ///   is `(-a) + b`. Two binary operators of the same precedence do not bind tighter than
    ///   each other: `+` and `*` merge instead, and `^` nests to the right.
    pub fn binds_tighter(&self, new: &Kind) -> bool {
        let (lhs, rhs) = (self.precedence(), new.precedence());
        match (lhs, rhs) {
            (Precedence::Root, _) => false,
            (Precedence::Atom, Precedence::Atom) => {
                matches!(self, Self::Num(_) | Self::Var(_) | Self::Const(_))
            },
            _ if lhs != rhs => lhs > rhs,
            _ => self.is_unary() && !new.is_unary(),
        }
    }

    /// Returns true if an incoming `new` node merges into a node of this variant, growing its
    /// arity instead of being inserted. This flattens `a + b + c` into one sum.
    pub fn merges_with(&self, new: &Kind) -> bool {
        matches!((self, new), (Self::Add, Self::Add) | (Self::Mult, Self::Mult))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_skip_atoms() {
        assert!(Kind::Var('x').binds_tighter(&Kind::Add));
        assert!(Kind::Root { main: false }.binds_tighter(&Kind::Pow));
        assert!(!Kind::Root { main: true }.binds_tighter(&Kind::Pow));
    }

    #[test]
    fn higher_precedence_binds_tighter() {
        assert!(Kind::Pow.binds_tighter(&Kind::Mult));
        assert!(Kind::Mult.binds_tighter(&Kind::Add));
        assert!(!Kind::Add.binds_tighter(&Kind::Mult));
        assert!(!Kind::Neg.binds_tighter(&Kind::Pow));
    }

    #[test]
    fn same_family() {
        assert!(Kind::Neg.binds_tighter(&Kind::Add));
        assert!(Kind::Inv.binds_tighter(&Kind::Mult));
        assert!(!Kind::Add.binds_tighter(&Kind::Neg));
        assert!(!Kind::Neg.binds_tighter(&Kind::Neg));
        assert!(!Kind::Pow.binds_tighter(&Kind::Pow));
    }

    #[test]
    fn nested_root_is_an_atom() {
        let group = Kind::Root { main: false };
        assert!(!group.binds_tighter(&Kind::Var('x')));
        assert!(!Kind::Add.binds_tighter(&group));
        assert!(Kind::Num(2.into()).binds_tighter(&group));
    }

    #[test]
    fn merging() {
        assert!(Kind::Add.merges_with(&Kind::Add));
        assert!(Kind::Mult.merges_with(&Kind::Mult));
        assert!(!Kind::Add.merges_with(&Kind::Neg));
        assert!(!Kind::Pow.merges_with(&Kind::Pow));
    }
}
