//! Test utilities for ADIF parser testing
//!
//! This module provides sample log content and helper functions used across
//! the ADIF test modules.

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::DateFilter;

// Test modules
mod parser_tests;

/// Helper to create a typical ADIF export with a header and three QSOs
pub fn create_test_adif() -> String {
    r#"ADIF export from TestLogger
<ADIF_VER:5>3.1.4
<PROGRAMID:10>TestLogger
<EOH>
<CALL:4>W1AW<QSO_DATE:8>20230110<TIME_ON:4>1412<BAND:3>20m<MODE:3>SSB<GRIDSQUARE:6>FN31pr<EOR>
<call:5>K1ABC<qso_date:8>20230615<time_on:6>221500<band:3>40m<mode:2>CW<gridsquare:4>FN42<eor>
<CALL:5>JA1XX<QSO_DATE:8:D>20231201<TIME_ON:4>0930<BAND:3>15m<MODE:3>FT8<GRIDSQUARE:4>PM95<EOR>
"#
    .to_string()
}

/// Build a date filter from `(y, m, d)` bounds
pub fn date_filter(start: Option<(i32, u32, u32)>, end: Option<(i32, u32, u32)>) -> DateFilter {
    let to_date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    DateFilter::new(start.map(to_date), end.map(to_date)).unwrap()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
