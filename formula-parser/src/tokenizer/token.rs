use crate::tree::Kind;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The node variant a token turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    Add,
    Neg,
    Mult,
    Inv,
    Pow,
    Num,
    Var,
    Func,
    Set,
    Const,
}

impl TokenKind {
    /// Returns the token kind for an operator character.
    pub fn from_operator(op: char) -> Option<Self> {
        match op {
            '+' => Some(Self::Add),
            '-' => Some(Self::Neg),
            '*' => Some(Self::Mult),
            '/' => Some(Self::Inv),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the node kind for a token of this kind with the given content, or [`None`] if the
    /// content does not fit (for example, a [`TokenKind::Num`] that is not a number).
    pub fn to_node_kind(self, content: &str) -> Option<Kind> {
        Some(match self {
            Self::Add => Kind::Add,
            Self::Neg => Kind::Neg,
            Self::Mult => Kind::Mult,
            Self::Inv => Kind::Inv,
            Self::Pow => Kind::Pow,
            Self::Num => Kind::Num(crate::tree::Number::parse(content)?),
            Self::Var => {
                let mut chars = content.chars();
                let name = chars.next().filter(char::is_ascii_alphabetic)?;
                if chars.next().is_some() {
                    return None;
                }
                Kind::Var(name)
            },
            Self::Func => Kind::Func(content.to_string()),
            Self::Set => Kind::Set(content.to_string()),
            Self::Const => Kind::Const(content.to_string()),
        })
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// A single lexical item tagged with the node variant it becomes.
    Leaf {
        /// The kind of token.
        kind: TokenKind,

        /// The raw text of the token. Bracket tokens keep their delimiters.
        content: String,

        /// The region of the source code that this token originated from. Implicit operators
        /// have an empty span.
        span: Range<usize>,
    },

    /// The tokens of a parenthesized group, to be built into their own tree.
    Group {
        /// The tokens inside the parentheses.
        tokens: Vec<Token>,

        /// The region of the source code spanned by the group, including the parentheses.
        span: Range<usize>,
    },
}

impl Token {
    /// Creates a leaf token that does not point at any source code.
    pub fn leaf(kind: TokenKind, content: impl Into<String>) -> Self {
        Self::Leaf { kind, content: content.into(), span: 0..0 }
    }

    /// Creates a group token that does not point at any source code.
    pub fn group(tokens: Vec<Token>) -> Self {
        Self::Group { tokens, span: 0..0 }
    }

    /// Returns the kind of the token, or [`None`] for a group.
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::Leaf { kind, .. } => Some(*kind),
            Self::Group { .. } => None,
        }
    }

    /// Returns the span of the token.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Leaf { span, .. } | Self::Group { span, .. } => span.clone(),
        }
    }

    /// Returns true if the token stands for a value: a number, constant, variable, or group.
    pub fn is_operand(&self) -> bool {
        matches!(
            self.kind(),
            None | Some(TokenKind::Num | TokenKind::Const | TokenKind::Var)
        )
    }
}
