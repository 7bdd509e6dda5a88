//! erfcx: Arbitrary-Precision Scaled Complementary Error Function
//!
//! A library and CLI tool for evaluating erfcx(x) = exp(x^2) * erfc(x) with
//! every intermediate carried in arbitrary precision (MPFR, through the
//! `rug` crate).
//!
//! Native double precision cannot evaluate this product directly for large
//! |x|: exp(x^2) overflows somewhere past x = 26 while erfc(x) underflows to
//! zero, even though the product itself stays finite and well-scaled across
//! the whole real line. Promoting the input and carrying the working
//! precision through both factors avoids both failures.
//!
//! ## Quick Start
//!
//! ```rust
//! use erfcx::eval::Evaluator;
//!
//! let evaluator = Evaluator::new();
//! let evaluation = evaluator.scaled_erfc(1.0).unwrap();
//!
//! // 0.42758357615580700441075034449052... at the default working precision
//! println!("{}", evaluation.to_decimal_string());
//! ```

pub mod cli;
pub mod constants;
pub mod error;
pub mod eval;
pub mod format;

// Re-export commonly used types
pub use error::{Error, Result};
pub use eval::{Evaluation, Evaluator};
