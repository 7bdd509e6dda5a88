//! Plain text output formatter

use crate::error::Result;
use crate::eval::Evaluation;
use crate::format::OutputFormatter;

/// Text formatter - outputs the canonical decimal value and nothing else
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Canonical decimal value, one line"
    }

    fn format(&self, evaluation: &Evaluation) -> Result<String> {
        Ok(evaluation.to_decimal_string())
    }
}
