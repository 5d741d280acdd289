use calc_lang_interpreter::Error;

pub struct Printer {}

impl Printer {
    pub fn print(&mut self, result: Result<f64, Error>) {
        match result {
            Ok(value) => println!("{}", value),
            Err(err) => eprintln!("{}", err),
        }
    }
}
