//! The streams supplied to a run.

use std::io::{Read, Seek};

use crate::error::{ReconError, ReconResult};

/// Fewest sources a caller should accept for a meaningful comparison.
pub const MINIMUM_SOURCES: usize = 2;

/// Up to one seekable stream per source.
#[derive(Debug)]
pub struct SourceFiles<R: Read + Seek> {
    /// Payroll export.
    pub payroll: Option<R>,
    /// Benefits-administration export.
    pub benadmin: Option<R>,
    /// Carrier billing statement.
    pub carrier: Option<R>,
}

impl<R: Read + Seek> Default for SourceFiles<R> {
    fn default() -> Self {
        Self {
            payroll: None,
            benadmin: None,
            carrier: None,
        }
    }
}

impl<R: Read + Seek> SourceFiles<R> {
    /// Creates a set with no streams.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payroll stream.
    pub fn with_payroll(mut self, stream: R) -> Self {
        self.payroll = Some(stream);
        self
    }

    /// Sets the benefits-administration stream.
    pub fn with_benadmin(mut self, stream: R) -> Self {
        self.benadmin = Some(stream);
        self
    }

    /// Sets the carrier stream.
    pub fn with_carrier(mut self, stream: R) -> Self {
        self.carrier = Some(stream);
        self
    }

    /// Number of slots that hold a stream, readable or not.
    pub fn provided_count(&self) -> usize {
        [
            self.payroll.is_some(),
            self.benadmin.is_some(),
            self.carrier.is_some(),
        ]
        .into_iter()
        .filter(|provided| *provided)
        .count()
    }
}

/// Rejects a set holding fewer than `required` streams.
///
/// The engine itself accepts any number of sources; this is for callers that
/// want to refuse thin uploads.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use benefits_recon::pipeline::{SourceFiles, ensure_minimum_sources};
///
/// let files = SourceFiles::new().with_payroll(Cursor::new(Vec::new()));
/// assert!(ensure_minimum_sources(&files, 2).is_err());
/// ```
pub fn ensure_minimum_sources<R: Read + Seek>(
    files: &SourceFiles<R>,
    required: usize,
) -> ReconResult<()> {
    let provided = files.provided_count();
    if provided < required {
        return Err(ReconError::InsufficientSources { provided, required });
    }
    Ok(())
}
