//! Core WSPR parser implementation
//!
//! This module iterates spot lines, converts each to a contact and applies the
//! chronological date cutoff.

use std::path::Path;
use tracing::{info, warn};

use super::spot::WsprSpot;
use crate::app::services::parse_result::{ParseResult, ParseStats, parse_log_file};
use crate::config::DateFilter;

/// WSPR parser for spot logs
///
/// - Blank lines are ignored
/// - Lines with too few columns or non-numeric SNR, drift or frequency are skipped
/// - The first spot dated outside the filter stops the parse; nothing after it is read
/// - Spots with an unparsable date are kept without filtering
#[derive(Debug, Clone, Default)]
pub struct WsprParser {
    date_filter: DateFilter,
}

impl WsprParser {
    pub fn new(date_filter: DateFilter) -> Self {
        Self { date_filter }
    }

    pub fn date_filter(&self) -> &DateFilter {
        &self.date_filter
    }

    /// Parse a WSPR spot file; an unreadable file yields an empty result
    pub fn parse_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing WSPR file: {}", file_path.display());
        parse_log_file(file_path, "WSPR", |text| self.parse_str(text))
    }

    /// Parse WSPR spot text
    pub fn parse_str(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut contacts = Vec::new();

        for (index, line) in text.lines().enumerate() {
            stats.total_lines += 1;

            if line.trim().is_empty() {
                continue;
            }
            stats.data_lines += 1;
            let line_number = index + 1;

            let spot = match WsprSpot::parse_line(line, line_number) {
                Ok(spot) => spot,
                Err(e) => {
                    stats.lines_skipped += 1;
                    warn!("Skipping WSPR line {}: {}", line_number, e);
                    stats.add_error(e.to_string());
                    continue;
                }
            };

            if let Some(date) = spot.spot_date {
                if !self.date_filter.contains(date) {
                    info!(
                        "Line {}: spot dated {} is outside the date filter, stopping",
                        line_number, date
                    );
                    stats.records_filtered += 1;
                    stats.stopped_early = true;
                    break;
                }
            }

            contacts.push(spot.into_contact());
            stats.contacts_parsed += 1;
        }

        info!(
            "Parsed {} contacts from {} WSPR data lines ({} skipped{})",
            stats.contacts_parsed,
            stats.data_lines,
            stats.lines_skipped,
            if stats.stopped_early {
                ", stopped at date cutoff"
            } else {
                ""
            }
        );

        ParseResult { contacts, stats }
    }
}
