//! Evaluation handler
//!
//! Runs the fixed-precision evaluation for the parsed input and prints the
//! formatted result.

use crate::cli::Cli;
use crate::constants::output::DEFAULT_FORMAT;
use crate::error::{Error, Result};
use crate::eval::Evaluator;
use crate::format::{available_formats, get_formatter};
use tracing::debug;

/// Run the evaluation
pub fn run(args: Cli) -> Result<()> {
    // Handle list flags first
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let x = match args.x {
        Some(x) => x,
        None => {
            eprintln!("Error: no input value given. Usage: erfcx <x>");
            std::process::exit(2);
        }
    };

    let format = args.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    let evaluator = Evaluator::new();
    debug!(
        x,
        precision_bits = evaluator.precision(),
        "evaluating scaled complementary error function"
    );

    let evaluation = evaluator.scaled_erfc(x)?;

    let formatter = get_formatter(&format).ok_or_else(|| Error::UnknownFormat(format.clone()))?;
    let output = formatter.format(&evaluation)?;

    println!("{}", output);

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
