use formula_compute::{error::{DivisionByZero, UndefinedResult}, simplify};
use formula_error::{Category, Error};
use formula_parser::{compile, render};
use pretty_assertions::assert_eq;

/// Compiles, simplifies and renders the source.
fn run(input: &str) -> Result<String, Error> {
    Ok(render(&simplify(&compile(input)?)?))
}

/// Sources that cover every rewrite rule.
const SAMPLES: &[&str] = &[
    "2+3",
    "x+x",
    "x*x",
    "2*(3+4)",
    "(x + 1)(x - 1)",
    "3x^2 - 2x + 1 - x^2",
    "x/y",
    "(y^-1)x",
    "2^x 3",
    "x[f] + 2[f]",
    "(a + b)^2",
    "\\pi\\ r^2",
    "-(x - 3)",
    "1.5x + 0.5x",
    "(xy)^a / x^a",
    "(x + 1)^0.5 (x + 1)^0.5",
    "[f] + -x",
    "3*[f]*3-(2)",
    "{s} - x - 2",
    "x^[f] - x",
    "[f] - {s}",
    "(y - 1)/{s}",
    "1.5e",
    "123456789.125 * 1000 - 0.5",
];

/// Operands combined by [`generated`].
const OPERANDS: &[&str] = &["x", "2", "0.5", "[f]", "{s}", "\\c\\", "(y - 1)"];

/// Operators combined by [`generated`].
const OPERATORS: &[&str] = &["+", "-", "*", "/", "^"];

/// Every expression of the form `a op b op c` over [`OPERANDS`] and [`OPERATORS`].
fn generated() -> Vec<String> {
    let mut inputs = Vec::new();
    for a in OPERANDS {
        for op1 in OPERATORS {
            for b in OPERANDS {
                for op2 in OPERATORS {
                    for c in OPERANDS {
                        inputs.push(format!("{a} {op1} {b} {op2} {c}"));
                    }
                }
            }
        }
    }
    inputs
}

#[test]
fn examples() {
    assert_eq!(run("2+3").unwrap(), "5");
    assert_eq!(run("x+x").unwrap(), "2x");
    assert_eq!(run("x*x").unwrap(), "x^2");
    assert_eq!(run("2*(3+4)").unwrap(), "14");
}

#[test]
fn polynomials() {
    assert_eq!(run("3x^2 - 2x + 1 - x^2").unwrap(), "2x^2 - 2x + 1");
    assert_eq!(run("(a + b)^2").unwrap(), "a^2 + 2ab + b^2");
    assert_eq!(run("-(x - 3)").unwrap(), "-x + 3");
    assert_eq!(run("(x + 1)^0.5 (x + 1)^0.5").unwrap(), "x + 1");
}

#[test]
fn exponent_laws() {
    assert_eq!(run("(xy)^a / x^a").unwrap(), "y^a");
    assert_eq!(run("x^(1/2) x^(1/2)").unwrap(), "x");
}

#[test]
fn division_by_zero() {
    for input in ["0^-1", "0^0"] {
        let err = run(input).unwrap_err();
        assert_eq!(err.category(), Category::Math);
        assert!(err.is::<DivisionByZero>());
        assert!(err.spans.is_empty());
    }
}

#[test]
fn lex_error_names_character() {
    let err = run("x&y").unwrap_err();
    assert_eq!(err.category(), Category::Lex);
    assert!(err.to_string().contains('&'));
}

#[test]
fn token_errors() {
    for input in ["", "2 +", "x^", "()", "(x", "x)", "1.2.3"] {
        let err = run(input).unwrap_err();
        assert_eq!(err.category(), Category::Token, "{input:?}");
    }
}

#[test]
fn bracket_terms_keep_plus_before_negation() {
    assert_eq!(run("[f] + -x").unwrap(), "[f] + -x");
    assert_eq!(run("3*[f]*3-(2)").unwrap(), "9[f] + -2");
    assert_eq!(run("x - [f]").unwrap(), "x - [f]");
}

#[test]
fn spaced_digits() {
    assert_eq!(run("1 2").unwrap(), "12");
    assert_eq!(run("1 2 x + 3").unwrap(), "12x + 3");
}

#[test]
fn overflowing_sum() {
    let big = format!("17{}", "0".repeat(307));
    let err = run(&format!("{big} + {big}")).unwrap_err();
    assert!(err.is::<UndefinedResult>());
}

#[test]
fn idempotence() {
    for input in SAMPLES {
        let once = simplify(&compile(input).unwrap()).unwrap();
        let twice = simplify(&once).unwrap();
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn round_trip() {
    for input in SAMPLES {
        let rendered = run(input).unwrap();
        assert_eq!(run(&rendered).unwrap(), rendered, "{input}");
    }
}

#[test]
fn generated_properties() {
    for input in generated() {
        // only inputs that simplify are checked
        let Ok(once) = simplify(&compile(&input).unwrap()) else {
            continue;
        };
        assert_eq!(simplify(&once).unwrap(), once, "{input}");

        let rendered = render(&once);
        assert_eq!(run(&rendered).unwrap(), rendered, "{input}");
    }
}
