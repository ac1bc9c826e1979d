use super::TabularError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Decodes an uploaded text file. CRLF line endings become LF so that
/// blank-line boundaries written on Windows are still found.
pub fn decode_text_upload(data: &[u8]) -> Result<String, TabularError> {
    let text = std::str::from_utf8(strip_bom(data))
        .map_err(|e| TabularError::InvalidUtf8(e.to_string()))?;

    Ok(text.replace("\r\n", "\n"))
}
