//! Parsing statistics and result structures shared by the log parsers
//!
//! Both the ADIF and WSPR parsers report through these types so the caller can
//! print one summary regardless of input format.

use crate::app::models::Contact;
use crate::{Error, Result};
use std::path::Path;
use tracing::error;

/// Parsing result with contacts and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Contacts in input order
    pub contacts: Vec<Contact>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Empty result recording a single file-level failure
    pub fn failed(error: &Error) -> Self {
        let mut stats = ParseStats::new();
        stats.add_error(error.to_string());
        Self {
            contacts: Vec::new(),
            stats,
        }
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Physical lines read
    pub total_lines: usize,

    /// Lines treated as data rows
    pub data_lines: usize,

    /// Contacts emitted
    pub contacts_parsed: usize,

    /// Records dropped by the date filter
    pub records_filtered: usize,

    /// Data lines dropped as malformed
    pub lines_skipped: usize,

    /// Parsing stopped before the end of input (WSPR date cutoff)
    pub stopped_early: bool,

    /// Per-occurrence error messages
    pub errors: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Share of data lines that produced output without error, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            let good = self.data_lines.saturating_sub(self.lines_skipped);
            (good as f64 / self.data_lines as f64) * 100.0
        }
    }
}

/// Read a log file, replacing invalid UTF-8 sequences
pub fn read_log_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a log file and hand its text to `parse`, or return an empty result on I/O failure
pub(crate) fn parse_log_file<F>(path: &Path, format_name: &str, parse: F) -> ParseResult
where
    F: FnOnce(&str) -> ParseResult,
{
    match read_log_text(path) {
        Ok(text) => parse(&text),
        Err(e) => {
            error!("Error reading {} file {}: {}", format_name, path.display(), e);
            ParseResult::failed(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_success_rate() {
        let stats = ParseStats {
            data_lines: 20,
            lines_skipped: 5,
            ..ParseStats::default()
        };
        assert_eq!(stats.success_rate(), 75.0);
        assert_eq!(ParseStats::new().success_rate(), 0.0);
    }

    #[test]
    fn test_failed_result_is_empty() {
        let result = ParseResult::failed(&Error::file_not_found("missing.adi"));
        assert_eq!(result.contact_count(), 0);
        assert_eq!(result.stats.error_count(), 1);
        assert!(result.stats.errors[0].contains("missing.adi"));
    }

    #[test]
    fn test_read_log_text_replaces_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<CALL:4>W1AW<NAME:3>J\xffE<EOR>\n").unwrap();

        let text = read_log_text(file.path()).unwrap();
        assert!(text.contains("W1AW"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_log_text_missing_file() {
        let err = read_log_text(Path::new("/definitely/not/here.adi")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
