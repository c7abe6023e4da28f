//! Tests for ADIF record assembly and date filtering

use super::*;
use crate::app::models::Coordinates;
use crate::app::services::adif_parser::AdifParser;
use crate::config::DateFilter;
use std::path::Path;

fn parse(text: &str) -> crate::ParseResult {
    AdifParser::new(DateFilter::unbounded()).parse_str(text)
}

#[test]
fn test_single_record_line() {
    let result = parse("<call:4>W1AW<qso_date:8>20230615<eor>");

    assert_eq!(result.contacts.len(), 1);
    let contact = &result.contacts[0];
    assert_eq!(contact.call(), Some("W1AW"));
    assert_eq!(contact.qso_date(), Some("20230615"));
    assert_eq!(contact.len(), 2);
}

#[test]
fn test_two_records_on_one_line_are_isolated() {
    let result = parse("<call:4>W1AW<band:3>20m<eor><call:5>K1ABC<eor>");

    assert_eq!(result.contacts.len(), 2);
    let first = result.contacts[0].clone();
    let second = result.contacts[1].clone();

    assert_eq!(first.call(), Some("W1AW"));
    assert_eq!(second.call(), Some("K1ABC"));
    assert_eq!(second.band(), None, "fields must not leak between records");

    let located = first.with_location(Coordinates::new(41.0, -72.0));
    assert!(located.is_mappable());
    assert!(!second.is_mappable());
    assert!(!result.contacts[0].is_mappable());
}

#[test]
fn test_record_without_eor_is_emitted() {
    let result = parse("<CALL:4>W1AW<BAND:3>20m\n<CALL:5>K1ABC<EOR>");

    assert_eq!(result.contacts.len(), 2);
    assert_eq!(result.contacts[0].band(), Some("20m"));
    assert_eq!(result.contacts[1].call(), Some("K1ABC"));
}

#[test]
fn test_empty_records_are_not_emitted() {
    let result = parse("<EOR><CALL:4>W1AW<EOR><EOR>");
    assert_eq!(result.contacts.len(), 1);
}

#[test]
fn test_non_data_lines_ignored() {
    let text = "Log comment line\n\n<ADIF_VER:5>3.1.4\n<BAND:3>20m<MODE:3>SSB<EOR>\n<CALL:4>W1AW<EOR>\n";
    let result = parse(text);

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].band(), None);
    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.data_lines, 1);
}

#[test]
fn test_record_split_across_lines_keeps_only_call_line() {
    let result = parse("<CALL:4>W1AW<QSO_DATE:8>20230615\n<BAND:3>20m<EOR>\n");

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].band(), None);
}

#[test]
fn test_header_is_skipped() {
    let text = "<PROGRAMID:4>TEST <CALL:4>HDR1 <EOH>\n<CALL:4>W1AW<EOR>\n";
    let result = parse(text);

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].call(), Some("W1AW"));
}

#[test]
fn test_full_log_preserves_order() {
    let result = parse(&create_test_adif());

    let calls: Vec<_> = result.contacts.iter().filter_map(|c| c.call()).collect();
    assert_eq!(calls, vec!["W1AW", "K1ABC", "JA1XX"]);

    let first = &result.contacts[0];
    assert_eq!(first.get("TIME_ON"), Some("1412"));
    assert_eq!(first.get("MODE"), Some("SSB"));
    assert_eq!(first.gridsquare(), Some("FN31pr"));
    assert_eq!(result.stats.contacts_parsed, 3);
    assert_eq!(result.stats.errors.len(), 0);
}

#[test]
fn test_date_filter_excludes_early_record() {
    let parser = AdifParser::new(date_filter(Some((2023, 6, 1)), None));
    let result =
        parser.parse_str("<CALL:4>W1AW<QSO_DATE:8>20230110<BAND:3>20m<GRIDSQUARE:4>FN31<EOR>");

    assert!(result.contacts.is_empty());
    assert_eq!(result.stats.records_filtered, 1);
    assert_eq!(result.stats.lines_skipped, 0);
}

#[test]
fn test_date_filter_only_drops_offending_record_on_line() {
    let parser = AdifParser::new(date_filter(Some((2023, 6, 1)), Some((2023, 6, 30))));
    let line = "<CALL:4>W1AW<QSO_DATE:8>20230101<BAND:3>20m<EOR>\
                <CALL:5>K1ABC<QSO_DATE:8>20230615<BAND:3>40m<EOR>\
                <CALL:4>N0XX<QSO_DATE:8>20230701<BAND:2>6m";
    let result = parser.parse_str(line);

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].call(), Some("K1ABC"));
    assert_eq!(result.contacts[0].band(), Some("40m"));
    assert_eq!(result.stats.records_filtered, 2);
}

#[test]
fn test_date_filter_bounds_inclusive() {
    let parser = AdifParser::new(date_filter(Some((2023, 1, 10)), Some((2023, 12, 1))));
    let result = parser.parse_str(&create_test_adif());
    assert_eq!(result.contacts.len(), 3);
}

#[test]
fn test_malformed_date_fails_line_when_filtering() {
    let parser = AdifParser::new(date_filter(Some((2023, 1, 1)), None));
    let text = "<CALL:4>W1AW<QSO_DATE:8>2023-6-1<EOR>\n<CALL:5>K1ABC<QSO_DATE:8>20230615<EOR>\n";
    let result = parser.parse_str(text);

    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].call(), Some("K1ABC"));
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("line 1"));
    assert!(result.stats.errors[0].contains("QSO_DATE"));
}

#[test]
fn test_malformed_date_kept_verbatim_without_filter() {
    let result = parse("<CALL:4>W1AW<QSO_DATE:8>notadate<EOR>");
    assert_eq!(result.contacts.len(), 1);
    assert_eq!(result.contacts[0].qso_date(), Some("notadate"));
}

#[test]
fn test_error_line_number_accounts_for_header() {
    let parser = AdifParser::new(date_filter(Some((2023, 1, 1)), None));
    let text = "header\n<EOH>\n<CALL:4>W1AW<QSO_DATE:3>bad<EOR>\n";
    let result = parser.parse_str(text);

    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("line 3"), "{}", result.stats.errors[0]);
}

#[test]
fn test_parse_file() {
    let temp_file = create_temp_file(&create_test_adif());
    let result = AdifParser::default().parse_file(temp_file.path());

    assert_eq!(result.contacts.len(), 3);
}

#[test]
fn test_parse_missing_file_yields_empty_result() {
    let result = AdifParser::default().parse_file(Path::new("/no/such/log.adi"));

    assert!(result.contacts.is_empty());
    assert_eq!(result.stats.errors.len(), 1);
}
