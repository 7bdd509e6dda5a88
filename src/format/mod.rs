//! Output formatters
//!
//! Provides trait-based output formatting for evaluation results.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::eval::Evaluation;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the evaluation result
    ///
    /// The returned string carries no trailing newline; the caller appends
    /// one when printing.
    fn format(&self, evaluation: &Evaluation) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "text" => Some(Box::new(text::TextFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Canonical decimal value, one line".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "JSON record with input, precision, and value".to_string(),
        },
    ]
}
