//! Report rendering for the console and JSON.

mod console;

pub use console::*;

use crate::error::Result;
use crate::pipeline::FixReport;

pub fn format_report_json(report: &FixReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
