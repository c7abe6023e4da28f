//! Tests for single spot line parsing and contact projection

use super::*;
use crate::Error;
use crate::app::services::wspr_parser::WsprSpot;
use crate::app::services::wspr_parser::spot::expand_spot_date;

#[test]
fn test_parse_typed_columns() {
    let spot = WsprSpot::parse_line(SAMPLE_SPOT, 1).unwrap();

    assert_eq!(spot.date, "230615");
    assert_eq!(spot.spot_date, Some(date(2023, 6, 15)));
    assert_eq!(spot.time, "1200");
    assert_eq!(spot.snr, -21.0);
    assert_eq!(spot.drift, 0.3);
    assert_eq!(spot.frequency, 14.097065);
    assert_eq!(spot.tx_call, "K1ABC");
    assert_eq!(spot.tx_grid, "FN42");
    assert_eq!(spot.tx_power, "37");
    assert_eq!(spot.rx_call, "W1AW");
    assert_eq!(spot.rx_grid, "FN31pr");
    assert_eq!(spot.distance, 123);
    assert_eq!(spot.azimuth, 45);
    assert_eq!(spot.band(), "20m");
}

#[test]
fn test_locations_resolved() {
    let spot = WsprSpot::parse_line(SAMPLE_SPOT, 1).unwrap();

    let tx = spot.tx_location.unwrap();
    assert_eq!(tx.latitude, 42.5);
    assert_eq!(tx.longitude, -71.0);

    let rx = spot.rx_location.unwrap();
    assert!((rx.latitude - 41.729167).abs() < 1e-6);
    assert!((rx.longitude - -72.708333).abs() < 1e-6);
}

#[test]
fn test_short_line_is_format_error() {
    let err = WsprSpot::parse_line("230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31", 7)
        .unwrap_err();

    assert!(matches!(err, Error::WsprFormat { line: 7, .. }));
    assert!(err.to_string().contains("found 10"));
}

#[test]
fn test_non_numeric_frequency_is_format_error() {
    let line = "230615 1200 -21 0.3 fourteen K1ABC FN42 37 W1AW FN31 123 45";
    let err = WsprSpot::parse_line(line, 3).unwrap_err();

    assert!(matches!(err, Error::WsprFormat { line: 3, .. }));
    assert!(err.to_string().contains("frequency"));
}

#[test]
fn test_invalid_tx_grid_is_cleared() {
    let line = "230615 1200 -21 0.3 14.097065 K1ABC ZZ99 37 W1AW FN31 123 45";
    let spot = WsprSpot::parse_line(line, 1).unwrap();

    assert_eq!(spot.tx_grid, "");
    assert!(spot.tx_location.is_none());
    assert!(spot.rx_location.is_some());

    // Two-character fields pass the locator pattern but not the spot check
    let field_only = "230615 1200 -21 0.3 14.097065 K1ABC FN 37 W1AW FN31 123 45";
    let spot = WsprSpot::parse_line(field_only, 1).unwrap();
    assert_eq!(spot.tx_grid, "");
}

#[test]
fn test_rx_grid_converted_without_validation() {
    let line = "230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN3 123 45";
    let spot = WsprSpot::parse_line(line, 1).unwrap();

    assert_eq!(spot.rx_grid, "FN3");
    let rx = spot.rx_location.unwrap();
    assert_eq!(rx.latitude, 45.0);
    assert_eq!(rx.longitude, -70.0);

    let bad_rx = "230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW 9X 123 45";
    let spot = WsprSpot::parse_line(bad_rx, 1).unwrap();
    assert!(spot.rx_location.is_none());
}

#[test]
fn test_non_numeric_distance_and_azimuth_become_zero() {
    let line = "230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31 12km -5";
    let spot = WsprSpot::parse_line(line, 1).unwrap();

    assert_eq!(spot.distance, 0);
    assert_eq!(spot.azimuth, 0);
}

#[test]
fn test_expand_spot_date() {
    assert_eq!(expand_spot_date("230615"), Some(date(2023, 6, 15)));
    assert_eq!(expand_spot_date("000229"), Some(date(2000, 2, 29)));
    assert_eq!(expand_spot_date("231340"), None);
    assert_eq!(expand_spot_date("2023-06-15"), None);
}

#[test]
fn test_into_contact_projection() {
    let contact = WsprSpot::parse_line(SAMPLE_SPOT, 1).unwrap().into_contact();

    assert_eq!(contact.call(), Some("K1ABC"));
    assert_eq!(contact.gridsquare(), Some("FN42"));
    assert_eq!(contact.qso_date(), Some("20230615"));
    assert_eq!(contact.get("TIME_ON"), Some("1200"));
    assert_eq!(contact.band(), Some("20m"));
    assert_eq!(contact.get("MODE"), Some("WSPR"));
    assert_eq!(contact.get("FREQ"), Some("14.097065"));
    assert_eq!(contact.get("TX_PWR"), Some("37"));
    assert_eq!(contact.get("STATION_CALLSIGN"), Some("W1AW"));
    assert_eq!(contact.my_gridsquare(), Some("FN31pr"));
    assert_eq!(contact.get("DISTANCE"), Some("123"));
    assert_eq!(contact.get("ANT_AZ"), Some("45"));
    assert_eq!(contact.get("SNR"), Some("-21"));
    assert_eq!(contact.get("DRIFT"), Some("0.3"));

    assert!(contact.is_mappable());
    assert!(contact.operator_location().is_some());
}

#[test]
fn test_into_contact_keeps_raw_unparsable_date() {
    let line = "2306xx 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31 123 45";
    let contact = WsprSpot::parse_line(line, 1).unwrap().into_contact();

    assert_eq!(contact.qso_date(), Some("2306xx"));
}

#[test]
fn test_out_of_plan_frequency_has_empty_band() {
    let line = "230615 1200 -21 0.3 432.3 K1ABC FN42 37 W1AW FN31 123 45";
    let contact = WsprSpot::parse_line(line, 1).unwrap().into_contact();

    assert_eq!(contact.band(), Some(""));
    assert_eq!(contact.get("FREQ"), Some("432.3"));
}
