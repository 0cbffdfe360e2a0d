//! Reader for the published sheet exports.
//!
//! The sheets are plain comma-separated text: a header line followed by data
//! lines. Quotes are read as ordinary characters, so a cell that contains a
//! literal comma shifts every following cell of that line one column right.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::AppError;

/// One data line paired with the header line it was read under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    headers: StringRecord,
    values: StringRecord,
}

impl CsvRecord {
    /// Value of the named column, or `None` when the line was too short to reach it.
    /// With duplicated header names the rightmost column wins.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.headers
            .iter()
            .zip(self.values.iter())
            .filter(|(name, _)| *name == header)
            .last()
            .map(|(_, value)| value)
    }

    /// Value of the named column, empty when missing.
    pub fn get_or_empty(&self, header: &str) -> &str {
        self.get(header).unwrap_or("")
    }
}

/// Parses header + data lines into records.
///
/// The input is trimmed first and blank lines are skipped, so trailing blank
/// lines never become records. Headers and cells are trimmed, and CRLF line
/// endings are accepted. Cells beyond the header count are ignored; headers
/// beyond the cell count are absent from the record.
pub fn parse_csv(text: &str) -> Result<Vec<CsvRecord>, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    reader
        .records()
        .map(|values| {
            Ok(CsvRecord {
                headers: headers.clone(),
                values: values?,
            })
        })
        .collect()
}
