mod printer;
mod reader;

use std::process::ExitCode;

use calc_lang_interpreter::{evaluate_line, Environment};
use rustyline::DefaultEditor;

use printer::Printer;
use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    environment: Environment,
    printer: Printer,
    show_tokens: bool,
}

impl Repl {
    /// Errors only abort the line they occurred on.
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Line(line) => {
                    if self.show_tokens {
                        crate::runner::print_tokens(&line);
                    }
                    let result = evaluate_line(&line, &mut self.environment);
                    self.printer.print(result)
                }
            }
        }
    }
}

pub fn start(environment: Environment, show_tokens: bool) -> ExitCode {
    let rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Could not start the line editor: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("starting REPL");

    Repl {
        reader: Reader::new(rl),
        environment,
        printer: Printer {},
        show_tokens,
    }
    .run();
    ExitCode::SUCCESS
}
