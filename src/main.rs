//! lucidshark-factors - Interactive in-collection divisor calculator
//!
//! For each supplied list of integers, reports which members divide
//! (factors of) and are divisible by (factors for) which other members,
//! memoizing results per unique-element set with optional durable caching.

mod cache;
mod config;
mod core;
mod error;
mod parse;
mod prompt;
mod render;

use cache::Factorizer;
use error::Result;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Run one interactive session: configure, loop until an empty line or
/// end of input, then save the caches.
fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let config = prompt::configure(input, output)?;
    let mut factorizer = Factorizer::new(&config);

    loop {
        write!(
            output,
            "Please enter a comma-separated list of integers (Enter to exit program): "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let numbers = match parse::parse_collection(line) {
            Ok(numbers) => numbers,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        writeln!(output, "*** FACTORS OF ***")?;
        render::write_mapping(output, &factorizer.get_factors_of(&numbers))?;

        writeln!(output, "*** FACTORS FOR ***")?;
        render::write_mapping(output, &factorizer.get_factors_for(&numbers))?;
    }

    // Explicit save; the factorizer's Drop backstops error paths.
    factorizer.save()
}
