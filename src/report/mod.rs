pub mod json;
pub mod md;

use crate::error::ScorecardError;
use crate::types::report::RoundReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &RoundReport, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
