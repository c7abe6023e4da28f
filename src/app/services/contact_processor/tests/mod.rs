//! Tests for the contact processing pipeline


use crate::app::models::{Contact, Coordinates};

/// ADIF-style contact with the given locator and band
pub fn create_test_contact(call: &str, grid: &str, band: &str) -> Contact {
    Contact::from_fields([("CALL", call), ("GRIDSQUARE", grid), ("BAND", band)])
}

/// Contact that already carries coordinates, as a WSPR spot does
pub fn create_located_contact(call: &str, latitude: f64, longitude: f64) -> Contact {
    Contact::from_fields([("CALL", call), ("BAND", "20m")])
        .with_location(Coordinates::new(latitude, longitude))
}
