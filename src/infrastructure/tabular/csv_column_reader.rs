use csv::{ReaderBuilder, StringRecord};

use super::TabularError;
use super::text_upload::strip_bom;

fn read_headers(data: &[u8]) -> Result<(csv::Reader<&[u8]>, StringRecord), TabularError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(strip_bom(data));
    let headers = reader.headers()?.clone();

    if headers.is_empty() {
        return Err(TabularError::MissingHeader);
    }

    Ok((reader, headers))
}

/// Header names in file order.
pub fn read_csv_columns(data: &[u8]) -> Result<Vec<String>, TabularError> {
    let (_, headers) = read_headers(data)?;
    Ok(headers.iter().map(String::from).collect())
}

/// Cells of `column` in row order. Short rows yield empty cells.
pub fn read_csv_column(data: &[u8], column: &str) -> Result<Vec<String>, TabularError> {
    let (mut reader, headers) = read_headers(data)?;

    let Some(position) = headers.iter().position(|h| h.trim() == column.trim()) else {
        return Err(TabularError::UnknownColumn {
            column: column.to_string(),
            available: headers.iter().map(String::from).collect(),
        });
    };

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.get(position).unwrap_or_default().to_string());
    }

    tracing::debug!(column = %column, rows = cells.len(), "Read csv column");
    Ok(cells)
}
