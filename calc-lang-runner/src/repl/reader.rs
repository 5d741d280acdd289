use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Line(String),
}

pub struct Reader {
    rl: Editor<(), DefaultHistory>,
}

impl Reader {
    pub fn new(rl: Editor<(), DefaultHistory>) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        match self.rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                ReadOutput::Clear
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                ReadOutput::Exit
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                ReadOutput::Exit
            }
            Ok(line) if line.trim().is_empty() => ReadOutput::Clear,
            Ok(line) => {
                if let Err(err) = self.rl.add_history_entry(line.as_str()) {
                    log::warn!("could not add history entry: {}", err);
                }
                ReadOutput::Line(line)
            }
        }
    }
}
