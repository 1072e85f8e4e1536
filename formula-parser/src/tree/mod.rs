//! The expression tree produced by [`compile`](crate::compile).
//!
//! A [`Node`] owns its children. Trees are built by the [`builder`](crate::builder), which
//! tracks parents and declared arities in an arena while inserting tokens; the finished tree is
//! a plain owned structure, and every later stage (simplification, rendering) treats it as
//! immutable, producing new trees instead of editing existing ones.

mod number;

pub use number::Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variant of a [`Node`], with any data attached to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// The root of a tree. `main` is true for the outermost tree, and false for the root of a
    /// parenthesized subexpression.
    Root { main: bool },

    /// A sum of any number of terms.
    Add,

    /// Unary negation, `-x`.
    Neg,

    /// A product of any number of factors.
    Mult,

    /// Unary inverse, `/x`.
    Inv,

    /// A base raised to an exponent.
    Pow,

    /// A number.
    Num(Number),

    /// A single-letter variable.
    Var(char),

    /// A function application in square brackets, such as `[sin x]`. The content is opaque.
    Func(String),

    /// A set literal in curly brackets, such as `{1, 2}`. The content is opaque.
    Set(String),

    /// A named constant in backslashes, such as `\pi\`. The content is opaque.
    Const(String),
}

impl Kind {
    /// The display name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root { .. } => "Root",
            Self::Add => "Add",
            Self::Neg => "Neg",
            Self::Mult => "Mult",
            Self::Inv => "Inv",
            Self::Pow => "Pow",
            Self::Num(_) => "Num",
            Self::Var(_) => "Var",
            Self::Func(_) => "Func",
            Self::Set(_) => "Set",
            Self::Const(_) => "Const",
        }
    }

    /// The number of children a freshly created node of this variant accepts.
    ///
    /// Only [`Kind::Add`] and [`Kind::Mult`] grow beyond this, when a node of the same variant
    /// merges into them during tree building.
    pub fn arity(&self) -> usize {
        match self {
            Self::Root { .. } | Self::Neg | Self::Inv => 1,
            Self::Add | Self::Mult | Self::Pow => 2,
            Self::Num(_) | Self::Var(_) | Self::Func(_) | Self::Set(_) | Self::Const(_) => 0,
        }
    }

    /// Returns true if the variant is a leaf that never has children.
    pub fn is_leaf(&self) -> bool {
        self.arity() == 0
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The variant of the node.
    pub kind: Kind,

    /// The children of the node, in order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given kind and children.
    pub fn new(kind: Kind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Creates a leaf node.
    pub fn leaf(kind: Kind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Creates a number node.
    pub fn num(value: impl Into<Number>) -> Self {
        Self::leaf(Kind::Num(value.into()))
    }

    /// Creates a variable node.
    pub fn var(name: char) -> Self {
        Self::leaf(Kind::Var(name))
    }

    /// Creates a sum of the given terms.
    pub fn add(terms: Vec<Node>) -> Self {
        Self::new(Kind::Add, terms)
    }

    /// Creates a product of the given factors.
    pub fn mult(factors: Vec<Node>) -> Self {
        Self::new(Kind::Mult, factors)
    }

    /// Creates a power node.
    pub fn pow(base: Node, exponent: Node) -> Self {
        Self::new(Kind::Pow, vec![base, exponent])
    }

    /// If the node is a number, returns it.
    pub fn as_number(&self) -> Option<Number> {
        match self.kind {
            Kind::Num(num) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the node is a number.
    pub fn is_number(&self) -> bool {
        matches!(self.kind, Kind::Num(_))
    }

    /// Returns true if the node is the number one.
    pub fn is_one(&self) -> bool {
        self.as_number().map_or(false, Number::is_one)
    }

    /// Returns true if the node is a sum.
    pub fn is_add(&self) -> bool {
        matches!(self.kind, Kind::Add)
    }

    /// Returns the display name of the node's variant.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl From<Number> for Node {
    fn from(num: Number) -> Self {
        Self::leaf(Kind::Num(num))
    }
}
