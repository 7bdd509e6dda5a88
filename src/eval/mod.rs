//! Scaled complementary error function evaluation
//!
//! Computes erfcx(x) = exp(x^2) * erfc(x) with every intermediate carried in
//! arbitrary precision. For |x| beyond roughly 26 a native double-precision
//! computation fails before the product is taken: exp(x^2) overflows while
//! erfc(x) underflows to zero. Carrying the configured working precision
//! through both factors keeps the product well-scaled for any finite input.

use crate::constants::precision::WORKING_PRECISION_BITS;
use crate::error::{Error, Result};
use rug::Float;
use tracing::debug;

/// One evaluation of exp(x^2) * erfc(x)
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The double-precision input, as parsed
    pub input: f64,

    /// Working precision the value was computed at, in bits
    pub precision_bits: u32,

    /// The arbitrary-precision result
    pub value: Float,
}

impl Evaluation {
    /// Canonical decimal rendering of the result at the working precision
    pub fn to_decimal_string(&self) -> String {
        self.value.to_string_radix(10, None)
    }
}

/// Evaluator for the scaled complementary error function
///
/// The working precision is a field of the evaluator rather than
/// process-global state, so evaluators at different precisions can coexist
/// without interfering with each other.
pub struct Evaluator {
    precision_bits: u32,
}

impl Evaluator {
    /// Create an evaluator at the fixed default working precision
    pub fn new() -> Self {
        Self {
            precision_bits: WORKING_PRECISION_BITS,
        }
    }

    /// Create an evaluator at a caller-chosen working precision
    ///
    /// # Arguments
    /// * `bits` - Working precision in bits
    ///
    /// # Returns
    /// An evaluator, or `Error::InvalidPrecision` if `bits` falls outside the
    /// range supported by the underlying library.
    pub fn with_precision(bits: u32) -> Result<Self> {
        let (min, max) = (rug::float::prec_min(), rug::float::prec_max());
        if bits < min || bits > max {
            return Err(Error::InvalidPrecision(format!(
                "{} bits (supported range: {}..={})",
                bits, min, max
            )));
        }
        Ok(Self {
            precision_bits: bits,
        })
    }

    /// Working precision in bits
    pub fn precision(&self) -> u32 {
        self.precision_bits
    }

    /// Evaluate exp(x^2) * erfc(x)
    ///
    /// # Arguments
    /// * `x` - Input value, promoted to the working precision
    ///
    /// # Returns
    /// The evaluation record, or `Error::NonFiniteInput` for NaN or infinite
    /// input.
    ///
    /// # Algorithm
    /// 1. Promote x to the working precision.
    /// 2. Square, then exponentiate, in arbitrary precision.
    /// 3. Compute erfc(x) on the promoted value; the library's implementation
    ///    stays accurate for large |x| where double-precision erfc underflows.
    /// 4. Multiply the two factors at the working precision.
    pub fn scaled_erfc(&self, x: f64) -> Result<Evaluation> {
        if !x.is_finite() {
            return Err(Error::NonFiniteInput(x));
        }

        let promoted = Float::with_val(self.precision_bits, x);
        let exp_x2 = Float::with_val(self.precision_bits, promoted.square_ref()).exp();
        let erfc_x = Float::with_val(self.precision_bits, promoted.erfc_ref());
        let value = exp_x2 * erfc_x;

        debug!(
            x,
            precision_bits = self.precision_bits,
            "evaluated scaled erfc"
        );

        Ok(Evaluation {
            input: x,
            precision_bits: self.precision_bits,
            value,
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
