use logos::Logos;
use std::ops::Range;

/// The character classes recognized by the lexer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharKind {
    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[a-zA-Z]")]
    Letter,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    #[token("{")]
    OpenCurly,

    #[token("}")]
    CloseCurly,

    #[token("\\")]
    Backslash,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl CharKind {
    /// Returns true if the character is one of the operators `+ - * / ^`.
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Exp)
    }

    /// If the character opens a bracket group, returns its family.
    pub fn opens(self) -> Option<Bracket> {
        match self {
            Self::OpenParen => Some(Bracket::Round),
            Self::OpenSquare => Some(Bracket::Square),
            Self::OpenCurly => Some(Bracket::Curly),
            Self::Backslash => Some(Bracket::Backslash),
            _ => None,
        }
    }

    /// If the character closes a bracket group, returns its family.
    pub fn closes(self) -> Option<Bracket> {
        match self {
            Self::CloseParen => Some(Bracket::Round),
            Self::CloseSquare => Some(Bracket::Square),
            Self::CloseCurly => Some(Bracket::Curly),
            Self::Backslash => Some(Bracket::Backslash),
            _ => None,
        }
    }
}

/// The four bracket families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// `( ... )`, grouping.
    Round,

    /// `[ ... ]`, function application.
    Square,

    /// `{ ... }`, set literal.
    Curly,

    /// `\ ... \`, named constant. This family cannot nest.
    Backslash,
}

impl Bracket {
    /// The opening delimiter.
    pub fn open(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
            Self::Backslash => '\\',
        }
    }

    /// The closing delimiter.
    pub fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
            Self::Backslash => '\\',
        }
    }

    /// Returns true if a group of this family can contain a nested group of the same family.
    pub fn nests(self) -> bool {
        self != Self::Backslash
    }
}

/// The classification of a lexical item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A run of digits and decimal points.
    Number,

    /// A single letter.
    Letter,

    /// One of the operators `+ - * / ^`.
    Operator,

    /// A bracket group, including its delimiters.
    Group(Bracket),
}

/// A lexical item: a classified substring of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<'source> {
    /// The region of the source code that this item spans.
    pub span: Range<usize>,

    /// The kind of item.
    pub kind: ItemKind,

    /// The raw text of the item.
    pub lexeme: &'source str,
}

impl Item<'_> {
    /// For a group item, returns the text between its delimiters.
    pub fn inner(&self) -> &str {
        match self.kind {
            ItemKind::Group(_) => {
                // delimiters are single ASCII characters
                &self.lexeme[1..self.lexeme.len() - 1]
            },
            _ => self.lexeme,
        }
    }
}
