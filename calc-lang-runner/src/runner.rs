use std::path::Path;
use std::process::ExitCode;

use calc_lang_core::lexer::Tokenizer;
use calc_lang_interpreter::{evaluate_line, Environment};

/// Single-shot mode: any error is fatal.
pub fn execute_expression(input: &str, mut environment: Environment, show_tokens: bool) -> ExitCode {
    if show_tokens {
        print_tokens(input);
    }
    match evaluate_line(input, &mut environment) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Evaluates each non-blank line of the file in one environment, stopping at
/// the first error.
pub fn execute_file(path: &Path, mut environment: Environment, show_tokens: bool) -> ExitCode {
    log::info!("evaluating {}", path.display());
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Could not read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if show_tokens {
            print_tokens(line);
        }
        match evaluate_line(line, &mut environment) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("line {}: {}", index + 1, err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

pub fn print_tokens(input: &str) {
    for token in Tokenizer::new(input) {
        match token {
            Ok(token) => println!("{:?} {:?}", token.kind, token.text),
            Err(err) => println!("{}", err),
        }
    }
}
