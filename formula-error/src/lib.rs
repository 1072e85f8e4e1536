//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries them.

// lets `#[derive(ErrorKind)]` refer to this crate by name in its own tests
extern crate self as formula_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The stage of the pipeline an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A character in the source could not be classified.
    Lex,

    /// A lexical item could not be turned into a token, or the tokens do not form a tree.
    Token,

    /// The expression tree could not be rewritten.
    Math,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "lex error"),
            Self::Token => write!(f, "token error"),
            Self::Math => write!(f, "math error"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`&dyn Any`](Any), so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The stage of the pipeline this error belongs to.
    fn category(&self) -> Category;

    /// A one-line description of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. Errors raised on an
    /// already-built tree have no spans.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// The stage of the pipeline this error belongs to.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the given source.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr. An error without spans highlights the
    /// whole input.
    pub fn report_to_stderr(&self, input: &str) {
        let report = if self.spans.is_empty() {
            self.kind.build_report("input", &[0..input.len()])
        } else {
            self.build_report("input")
        };

        if report.eprint(("input", Source::from(input))).is_err() {
            eprintln!("{}", self);
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use formula_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        category = Lex,
        message = format!("unrecognized character `{}`", found),
        labels = [format!("this {} is not allowed", "character".fg(EXPR))],
        help = "only digits, letters, operators and brackets are allowed",
    )]
    struct Unrecognized {
        found: char,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(category = Math, message = "division by zero")]
    struct DivideByZero;

    /// Renders the report of the error without colors.
    fn report_text(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn display_includes_category() {
        let err = Error::new(vec![1..2], Unrecognized { found: '&' });
        assert_eq!(err.to_string(), "lex error: unrecognized character `&`");
        assert_eq!(err.category(), Category::Lex);
    }

    #[test]
    fn downcast_kind() {
        let err = Error::unspanned(DivideByZero);
        assert!(err.is::<DivideByZero>());
        assert!(!err.is::<Unrecognized>());
        assert_eq!(err.category(), Category::Math);
        assert_eq!(err.downcast_ref::<DivideByZero>(), Some(&DivideByZero));
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new(vec![1..2], Unrecognized { found: '&' });
        let text = report_text(&err, "x&y");
        assert!(text.contains("unrecognized character `&`"));
        assert!(text.contains("this character is not allowed"));
        assert!(text.contains("only digits, letters, operators and brackets are allowed"));
    }

    #[test]
    fn unspanned_report() {
        let err = Error::unspanned(DivideByZero);
        let text = report_text(&err, "0^0");
        assert!(text.contains("division by zero"));
    }
}
