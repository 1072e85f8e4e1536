use formula_compute::simplify;
use formula_error::Error;
use formula_parser::{compile_tokens, lexer, render, tokenizer};

/// Options that control how each line is processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the output of every stage to stderr.
    pub verbose: bool,
}

/// Compiles, simplifies and renders the given input.
pub fn run(input: &str, options: Options) -> Result<String, Error> {
    let items = lexer::lex(input)?;
    if options.verbose {
        eprintln!("items: {:?}", items.iter().map(|item| item.lexeme).collect::<Vec<_>>());
    }

    let tokens = tokenizer::tokenize_items(&items)?;
    if options.verbose {
        eprintln!("tokens: {:#?}", tokens);
    }

    let tree = compile_tokens(tokens)?;
    if options.verbose {
        eprintln!("tree: {}", render(&tree));
        eprintln!("{:#?}", tree);
    }

    let simplified = simplify(&tree)?;
    Ok(render(&simplified))
}

/// Processes one line of input, printing the result to stdout or the error report to stderr.
/// Returns true if the line was processed successfully.
pub fn read_eval(input: &str, options: Options) -> bool {
    match run(input, options) {
        Ok(output) => {
            println!("{}", output);
            true
        },
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use formula_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn simplifies_line() {
        assert_eq!(run("2(x + 1) - x", Options::default()).unwrap(), "x + 2");
    }

    #[test]
    fn verbose_output_matches() {
        let verbose = Options { verbose: true };
        assert_eq!(run("x*x", verbose).unwrap(), run("x*x", Options::default()).unwrap());
    }

    #[test]
    fn reports_each_category() {
        let categories = ["x & y", "(x", "0^0"]
            .map(|input| run(input, Options::default()).unwrap_err().category());
        assert_eq!(categories, [Category::Lex, Category::Token, Category::Math]);
    }
}
