use csv::Writer;

use super::TabularError;
use crate::domain::SeparationResult;

pub const RESULT_HEADERS: [&str; 3] = ["Title", "Prompt", "Output"];

/// Serialises results as CSV with a `Title,Prompt,Output` header.
pub fn write_results_csv(results: &[SeparationResult]) -> Result<String, TabularError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(RESULT_HEADERS)?;

    for result in results {
        writer.write_record([&result.title, &result.prompt, &result.output])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TabularError::Write(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| TabularError::InvalidUtf8(e.to_string()))
}
