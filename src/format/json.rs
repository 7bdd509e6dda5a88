//! JSON output formatter

use crate::error::Result;
use crate::eval::Evaluation;
use crate::format::OutputFormatter;
use serde::Serialize;

/// JSON formatter - outputs the evaluation as a pretty-printed record
pub struct JsonFormatter;

/// Serialized form of an evaluation
#[derive(Debug, Serialize)]
struct JsonEvaluation {
    input: f64,
    precision_bits: u32,
    value: String,
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON record with input, precision, and value"
    }

    fn format(&self, evaluation: &Evaluation) -> Result<String> {
        let record = JsonEvaluation {
            input: evaluation.input,
            precision_bits: evaluation.precision_bits,
            value: evaluation.to_decimal_string(),
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }
}
