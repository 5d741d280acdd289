mod repl;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use calc_lang_interpreter::environment::DEFAULT_MAX_CALL_DEPTH;
use calc_lang_interpreter::Environment;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Evaluate a single line and exit
    #[arg(short, long, conflicts_with = "path")]
    expression: Option<String>,
    /// Maximum nesting of user-defined function calls
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
    /// Print the tokens of every line before evaluating it
    #[arg(long)]
    tokens: bool,
    /// File to evaluate line by line
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let environment = Environment::with_builtins().with_max_call_depth(cli.max_call_depth);

    match (cli.expression, cli.path) {
        (Some(expression), _) => runner::execute_expression(&expression, environment, cli.tokens),
        (None, Some(path)) => runner::execute_file(&path, environment, cli.tokens),
        (None, None) => repl::start(environment, cli.tokens),
    }
}
