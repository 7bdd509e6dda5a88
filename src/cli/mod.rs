//! CLI argument surface and dispatch
//!
//! The whole surface is one evaluation: `erfcx <x>` prints
//! exp(x^2) * erfc(x) at the fixed working precision.

pub mod eval;

use crate::error::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Arbitrary-precision scaled complementary error function evaluator
#[derive(Parser)]
#[command(name = "erfcx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input value x; the program prints exp(x^2) * erfc(x)
    #[arg(allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the CLI
pub fn run() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    eval::run(cli)
}
