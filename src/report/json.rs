use crate::types::report::RoundReport;

pub fn to_json(report: &RoundReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
