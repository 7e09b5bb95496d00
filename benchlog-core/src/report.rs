use crate::domain::TrialRecord;
use crate::error::{BenchError, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[{'trial': '1', ...}, ...]` on one line.
    #[default]
    Text,
    /// JSON array of objects, keys in record order.
    Json,
}

pub fn render(records: &[TrialRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let items: Vec<String> = records.iter().map(|r| r.to_string()).collect();
            Ok(format!("[{}]", items.join(", ")))
        }
        OutputFormat::Json => serde_json::to_string_pretty(records).map_err(BenchError::from),
    }
}
