//! erfcx CLI entry point
//!
//! Arbitrary-precision evaluation of exp(x^2) * erfc(x)

use erfcx::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
