//! Test utilities for WSPR parser testing

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::DateFilter;

mod spot_tests;

/// A well-formed 20m spot received by W1AW
pub const SAMPLE_SPOT: &str = "230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31pr 123 45";

/// Helper to create a chronological spot log spanning three months
pub fn create_test_wspr() -> String {
    [
        "230501 0002 -18 0 7.040112 G4ABC IO91 23 W1AW FN31 5320 52",
        "230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31pr 123 45",
        "230615 1204 -9 -1 10.140201 VE3XYZ FN03 30 W1AW FN31 610 281",
        "230720 0330 -25 1 28.126100 JA1XX PM95 37 W1AW FN31 10852 330",
    ]
    .join("\n")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a date filter from optional bounds
pub fn date_filter(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateFilter {
    DateFilter::new(start, end).unwrap()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
