//! Splits source text into [`Item`]s.
//!
//! Characters are classified with a [`logos`] lexer; this module then groups them: runs of
//! digits become numbers (whitespace between digits does not end a number, so `1 2` is `12`),
//! every letter is its own item, and everything between a pair of
//! matching brackets becomes a single group item. Groups are not lexed any further here; the
//! [`tokenizer`](crate::tokenizer) recurses into parenthesized groups.

pub mod item;

use crate::error::{UnclosedBracket, UnmatchedBracket, UnrecognizedChar};
use formula_error::Error;
pub use item::{Bracket, CharKind, Item, ItemKind};
use logos::Logos;

/// A bracket group that has been opened but not closed yet.
struct OpenGroup {
    family: Bracket,

    /// Offset of the opening delimiter in the lexed text.
    start: usize,

    /// Number of nested groups of the same family that are currently open.
    depth: usize,
}

/// Splits the given source into lexical items.
pub fn lex(input: &str) -> Result<Vec<Item>, Error> {
    lex_at(input, 0)
}

/// Splits the given text into lexical items, where `offset` is the position of the text in the
/// whole source. This is used to lex the inside of a group while keeping spans absolute.
pub fn lex_at(input: &str, offset: usize) -> Result<Vec<Item>, Error> {
    let mut lexer = CharKind::lexer(input);
    let mut items = Vec::new();
    let mut group: Option<OpenGroup> = None;

    while let Some(result) = lexer.next() {
        let local = lexer.span();
        let span = local.start + offset..local.end + offset;
        let Ok(kind) = result else {
            return Err(unrecognized(lexer.slice(), span));
        };

        if let Some(open) = group.as_mut() {
            if kind.closes() == Some(open.family) {
                if open.depth == 0 {
                    items.push(Item {
                        span: open.start + offset..span.end,
                        kind: ItemKind::Group(open.family),
                        lexeme: &input[open.start..local.end],
                    });
                    group = None;
                } else {
                    open.depth -= 1;
                }
            } else if kind.opens() == Some(open.family) && open.family.nests() {
                open.depth += 1;
            }
            continue;
        }

        let item_kind = match kind {
            CharKind::Whitespace => continue,
            CharKind::Number => ItemKind::Number,
            CharKind::Letter => ItemKind::Letter,
            kind if kind.is_operator() => ItemKind::Operator,
            CharKind::Symbol => return Err(unrecognized(lexer.slice(), span)),
            kind => {
                if let Some(family) = kind.opens() {
                    group = Some(OpenGroup { family, start: local.start, depth: 0 });
                    continue;
                }

                let found = kind.closes().map_or(')', Bracket::close);
                return Err(Error::new(vec![span], UnmatchedBracket { found }));
            },
        };

        // digits separated only by whitespace continue the previous number
        if item_kind == ItemKind::Number {
            if let Some(prev) = items.last_mut().filter(|prev| prev.kind == ItemKind::Number) {
                prev.lexeme = &input[prev.span.start - offset..local.end];
                prev.span.end = span.end;
                continue;
            }
        }

        items.push(Item {
            span,
            kind: item_kind,
            lexeme: lexer.slice(),
        });
    }

    if let Some(open) = group {
        let start = open.start + offset;
        return Err(Error::new(vec![start..start + 1], UnclosedBracket {
            opening: open.family.open(),
            closing: open.family.close(),
        }));
    }

    Ok(items)
}

/// Creates the error for an unrecognized character.
fn unrecognized(slice: &str, span: std::ops::Range<usize>) -> Error {
    let found = slice.chars().next().unwrap_or_default();
    Error::new(vec![span], UnrecognizedChar { found })
}

#[cfg(test)]
mod tests {
    use formula_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the items produced by the lexer to the expected kinds and lexemes.
    fn compare_items<const N: usize>(input: &str, expected: [(ItemKind, &str); N]) {
        let items = lex(input).unwrap();
        let got = items.iter()
            .map(|item| (item.kind, item.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(got, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_items(
            "12 + 3.5x",
            [
                (ItemKind::Number, "12"),
                (ItemKind::Operator, "+"),
                (ItemKind::Number, "3.5"),
                (ItemKind::Letter, "x"),
            ],
        );
    }

    #[test]
    fn whitespace_inside_number() {
        compare_items(
            "1 2 x 3",
            [
                (ItemKind::Number, "1 2"),
                (ItemKind::Letter, "x"),
                (ItemKind::Number, "3"),
            ],
        );

        let items = lex_at("4  5", 10).unwrap();
        assert_eq!(items[0].span, 10..14);
    }

    #[test]
    fn letters_are_single_items() {
        compare_items(
            "ab^c",
            [
                (ItemKind::Letter, "a"),
                (ItemKind::Letter, "b"),
                (ItemKind::Operator, "^"),
                (ItemKind::Letter, "c"),
            ],
        );
    }

    #[test]
    fn nested_groups_of_the_same_family() {
        compare_items(
            "2((x+1)y)-[f[g]]",
            [
                (ItemKind::Number, "2"),
                (ItemKind::Group(Bracket::Round), "((x+1)y)"),
                (ItemKind::Operator, "-"),
                (ItemKind::Group(Bracket::Square), "[f[g]]"),
            ],
        );
    }

    #[test]
    fn other_families_inside_group() {
        compare_items(
            "{1, (2]}\\pi\\",
            [
                (ItemKind::Group(Bracket::Curly), "{1, (2]}"),
                (ItemKind::Group(Bracket::Backslash), "\\pi\\"),
            ],
        );
    }

    #[test]
    fn group_spans_are_absolute() {
        let items = lex_at("x(y)", 5).unwrap();
        assert_eq!(items[0].span, 5..6);
        assert_eq!(items[1].span, 6..9);
        assert_eq!(items[1].inner(), "y");
    }

    #[test]
    fn unrecognized_character() {
        let err = lex("x&y").unwrap_err();
        assert_eq!(err.category(), Category::Lex);
        assert_eq!(err.downcast_ref::<UnrecognizedChar>(), Some(&UnrecognizedChar { found: '&' }));
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn unmatched_closing_bracket() {
        let err = lex("x)").unwrap_err();
        assert_eq!(err.category(), Category::Token);
        assert_eq!(err.downcast_ref::<UnmatchedBracket>(), Some(&UnmatchedBracket { found: ')' }));
    }

    #[test]
    fn unclosed_bracket() {
        let err = lex("3 * [sin x").unwrap_err();
        assert_eq!(err.category(), Category::Token);
        assert_eq!(err.spans, vec![4..5]);
        assert!(err.is::<UnclosedBracket>());
    }
}
