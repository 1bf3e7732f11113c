//! Delimited-text reader for uploaded source files.

use std::io::{Read, Seek, SeekFrom};

use tracing::{debug, warn};

use crate::error::{ReconError, ReconResult};
use crate::models::{RawRow, SourceKind};

/// Reads every row of a source stream, degrading to no rows on failure.
///
/// The stream is rewound before reading, so the same stream can be read
/// any number of times with identical results. Read, decode and parse
/// failures are logged and produce an empty list; they never abort a run.
///
/// # Example
///
/// ```
/// use benefits_recon::ingest::read_rows;
/// use benefits_recon::models::SourceKind;
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(b"SSN, First Name\n123-45-6789, Ada\n".to_vec());
/// let rows = read_rows(&mut stream, SourceKind::Payroll);
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("first name"), Some("Ada"));
/// ```
pub fn read_rows<R: Read + Seek>(stream: &mut R, source: SourceKind) -> Vec<RawRow> {
    match try_read_rows(stream, source) {
        Ok(rows) => {
            debug!(source = %source, rows = rows.len(), "Read source file");
            rows
        }
        Err(err) => {
            warn!(source = %source, error = %err, "Treating unreadable source as empty");
            Vec::new()
        }
    }
}

/// Reads every row of a source stream, reporting failures to the caller.
pub fn try_read_rows<R: Read + Seek>(
    stream: &mut R,
    source: SourceKind,
) -> ReconResult<Vec<RawRow>> {
    let read_error = |e: std::io::Error| ReconError::SourceRead {
        source_label: source.label().to_string(),
        message: e.to_string(),
    };

    stream.seek(SeekFrom::Start(0)).map_err(read_error)?;
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).map_err(read_error)?;

    let text = String::from_utf8(bytes).map_err(|e| ReconError::SourceDecode {
        source_label: source.label().to_string(),
        message: e.to_string(),
    })?;

    parse_rows(&text, source)
}

/// Parses comma-separated text whose first line is the header.
///
/// Headers are trimmed and lower-cased, values trimmed. A record shorter
/// than the header simply lacks the trailing columns; cells past the
/// header are dropped.
pub fn parse_rows(text: &str, source: SourceKind) -> ReconResult<Vec<RawRow>> {
    let parse_error = |e: csv::Error| ReconError::SourceParse {
        source_label: source.label().to_string(),
        message: e.to_string(),
    };

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_error)?;

        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(value) = record.get(idx) {
                row.insert(header, value);
            }
        }
        rows.push(row);
    }

    Ok(rows)
}
