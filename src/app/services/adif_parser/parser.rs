//! Core ADIF parser implementation
//!
//! This module handles record assembly over the tag stream of each data row
//! and applies the per-record date filter.

use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, warn};

use super::tokenizer::{is_data_row, strip_header, tokenize_line};
use crate::app::models::{Contact, ContactBuilder};
use crate::app::services::parse_result::{ParseResult, ParseStats, parse_log_file};
use crate::config::DateFilter;
use crate::constants::{ADIF_DATE_FORMAT, ADIF_END_OF_RECORD, fields};
use crate::{Error, Result};

/// ADIF parser for contact logs
///
/// - One physical line is one record group; lines without `<CALL:` are ignored
/// - `<EOR>` closes a record; a record still open at end of line is emitted
/// - A record dated outside the filter is dropped along with the rest of its
///   fields up to the next `<EOR>`
/// - A malformed `QSO_DATE` under an active filter drops the whole line
#[derive(Debug, Clone, Default)]
pub struct AdifParser {
    date_filter: DateFilter,
}

/// Records produced from one data row
#[derive(Debug, Default)]
struct LineOutcome {
    contacts: Vec<Contact>,
    filtered: usize,
}

impl AdifParser {
    pub fn new(date_filter: DateFilter) -> Self {
        Self { date_filter }
    }

    pub fn date_filter(&self) -> &DateFilter {
        &self.date_filter
    }

    /// Parse an ADIF file; an unreadable file yields an empty result
    pub fn parse_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing ADIF file: {}", file_path.display());
        parse_log_file(file_path, "ADIF", |text| self.parse_str(text))
    }

    /// Parse ADIF text
    pub fn parse_str(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut contacts = Vec::new();

        let body = strip_header(text);
        let header_lines = text[..text.len() - body.len()].matches('\n').count();

        for (index, line) in body.lines().enumerate() {
            stats.total_lines += 1;

            if !is_data_row(line) {
                continue;
            }
            stats.data_lines += 1;
            let line_number = header_lines + index + 1;

            match self.parse_line(line, line_number) {
                Ok(outcome) => {
                    stats.records_filtered += outcome.filtered;
                    stats.contacts_parsed += outcome.contacts.len();
                    contacts.extend(outcome.contacts);
                }
                Err(e) => {
                    stats.lines_skipped += 1;
                    warn!("Skipping ADIF line {}: {}", line_number, e);
                    stats.add_error(e.to_string());
                }
            }
        }

        info!(
            "Parsed {} contacts from {} ADIF data lines ({} filtered by date, {} skipped)",
            stats.contacts_parsed, stats.data_lines, stats.records_filtered, stats.lines_skipped
        );

        ParseResult { contacts, stats }
    }

    /// Assemble the records of one data row
    fn parse_line(&self, line: &str, line_number: usize) -> Result<LineOutcome> {
        let mut outcome = LineOutcome::default();
        let mut builder = ContactBuilder::new();
        let mut skipping_record = false;

        for tag in tokenize_line(line) {
            if tag.name == ADIF_END_OF_RECORD {
                if skipping_record {
                    skipping_record = false;
                } else if let Some(contact) = builder.finish() {
                    outcome.contacts.push(contact);
                }
                continue;
            }

            if skipping_record {
                continue;
            }

            if tag.name == fields::QSO_DATE && self.date_filter.is_active() {
                let date = parse_qso_date(tag.value, line_number)?;
                if !self.date_filter.contains(date) {
                    debug!(
                        "Line {}: dropping {} dated {} outside filter",
                        line_number,
                        builder.get(fields::CALL).unwrap_or("record"),
                        date
                    );
                    builder.discard();
                    skipping_record = true;
                    outcome.filtered += 1;
                    continue;
                }
            }

            builder.insert(&tag.name, tag.value);
        }

        if !skipping_record {
            if let Some(contact) = builder.finish() {
                outcome.contacts.push(contact);
            }
        }

        Ok(outcome)
    }
}

fn parse_qso_date(value: &str, line_number: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ADIF_DATE_FORMAT).map_err(|e| {
        Error::adif_format(
            line_number,
            format!("invalid QSO_DATE '{}' (expected YYYYMMDD): {}", value, e),
        )
    })
}
