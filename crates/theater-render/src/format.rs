//! # Output Format Selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use theater_core::StatementSummary;

use crate::currency::CurrencyFormatter;
use crate::error::{RenderError, RenderResult};
use crate::{html, json, text};

/// The kinds of statement the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one line per performance.
    #[default]
    Text,

    /// HTML fragment with a table of performances.
    Html,

    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders a summary in the requested format.
///
/// Only the JSON format can fail.
pub fn render(
    summary: &StatementSummary,
    format: OutputFormat,
    currency: &dyn CurrencyFormatter,
) -> RenderResult<String> {
    match format {
        OutputFormat::Text => Ok(text::render_text(summary, currency)),
        OutputFormat::Html => Ok(html::render_html(summary, currency)),
        OutputFormat::Json => json::render_json(summary, currency),
    }
}
