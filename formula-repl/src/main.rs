mod pipeline;

use pipeline::{read_eval, Options};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, BufRead, IsTerminal}, process::ExitCode};

/// Processes every non-blank line of the given source, returning true if all of them succeeded.
fn read_eval_lines(lines: impl Iterator<Item = String>, options: Options) -> bool {
    lines.filter(|line| !line.trim().is_empty())
        .fold(true, |ok, line| read_eval(&line, options) && ok)
}

/// Runs the interactive prompt until a blank line, end of input or an interrupt.
fn repl(options: Options) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;
        read_eval(&input, options);
    }
}

fn main() -> ExitCode {
    let mut options = Options::default();
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => options.verbose = true,
            _ => filename = Some(arg),
        }
    }

    let ok = if let Some(filename) = filename {
        // simplify each line of a file
        match fs::read_to_string(&filename) {
            Ok(source) => read_eval_lines(source.lines().map(String::from), options),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                false
            },
        }
    } else if !io::stdin().is_terminal() {
        // simplify each line piped to stdin
        let lines = io::stdin().lock().lines().map_while(Result::ok);
        read_eval_lines(lines, options)
    } else {
        match repl(options) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
