//! Data models for QSO Mapper
//!
//! This module contains the core data structures for representing normalized
//! contact records from ADIF and WSPR logs, along with the coordinates derived
//! from their Maidenhead grid locators.

use crate::constants::{self, fields};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

// =============================================================================
// Coordinates
// =============================================================================

/// A point in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north
    pub latitude: f64,

    /// Longitude, positive east
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite and inside the geographic range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Round both components to the given number of decimal places
    pub fn rounded(self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self {
            latitude: (self.latitude * factor).round() / factor,
            longitude: (self.longitude * factor).round() / factor,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// =============================================================================
// Contact
// =============================================================================

/// A normalized radio contact
///
/// String fields are keyed by canonical upper-case ADIF names. The computed
/// location pairs are typed so a latitude never exists without its longitude.
/// A contact is only changed after construction by attaching coordinates, and
/// that happens by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    fields: BTreeMap<String, String>,
    location: Option<Coordinates>,
    operator_location: Option<Coordinates>,
}

impl Contact {
    /// Build a contact from name/value pairs, canonicalizing names and trimming values
    pub fn from_fields<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (canonical_name(k.as_ref()), v.as_ref().trim().to_string()))
            .collect();
        Self {
            fields,
            location: None,
            operator_location: None,
        }
    }

    /// Look up a field by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&canonical_name(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&canonical_name(name))
    }

    /// Iterate fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn call(&self) -> Option<&str> {
        self.get(fields::CALL)
    }

    pub fn gridsquare(&self) -> Option<&str> {
        self.get(fields::GRIDSQUARE).filter(|g| !g.is_empty())
    }

    pub fn my_gridsquare(&self) -> Option<&str> {
        self.get(fields::MY_GRIDSQUARE).filter(|g| !g.is_empty())
    }

    pub fn band(&self) -> Option<&str> {
        self.get(fields::BAND)
    }

    pub fn qso_date(&self) -> Option<&str> {
        self.get(fields::QSO_DATE)
    }

    /// Location of the worked station (`LATITUDE`/`LONGITUDE`)
    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Location of the operator (`MY_LATITUDE`/`MY_LONGITUDE`)
    pub fn operator_location(&self) -> Option<Coordinates> {
        self.operator_location
    }

    /// A contact is mappable when it carries a valid `LATITUDE`/`LONGITUDE` pair
    pub fn is_mappable(&self) -> bool {
        self.location.is_some_and(|c| c.is_valid())
    }

    /// Attach the worked station's coordinates
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach the operator's coordinates
    pub fn with_operator_location(mut self, location: Coordinates) -> Self {
        self.operator_location = Some(location);
        self
    }

    /// Call sign for log messages, `"unknown"` when absent
    pub fn display_call(&self) -> &str {
        self.call().filter(|c| !c.is_empty()).unwrap_or("unknown")
    }
}

impl Serialize for Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coordinate_entries =
            2 * (self.location.is_some() as usize + self.operator_location.is_some() as usize);
        let mut map = serializer.serialize_map(Some(self.fields.len() + coordinate_entries))?;

        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        if let Some(location) = self.location {
            map.serialize_entry(fields::LATITUDE, &location.latitude)?;
            map.serialize_entry(fields::LONGITUDE, &location.longitude)?;
        }
        if let Some(location) = self.operator_location {
            map.serialize_entry(fields::MY_LATITUDE, &location.latitude)?;
            map.serialize_entry(fields::MY_LONGITUDE, &location.longitude)?;
        }

        map.end()
    }
}

/// Accumulates the fields of one in-progress record
///
/// `finish` moves the accumulated fields into a new [`Contact`] and leaves the
/// builder empty, so a finished contact never shares storage with the next one.
#[derive(Debug, Default)]
pub struct ContactBuilder {
    fields: BTreeMap<String, String>,
}

impl ContactBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; later values for the same name replace earlier ones
    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields
            .insert(canonical_name(name), value.trim().to_string());
    }

    /// Look up a collected field by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&canonical_name(name)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Finalize the record, or `None` when no field was collected
    pub fn finish(&mut self) -> Option<Contact> {
        if self.fields.is_empty() {
            return None;
        }
        Some(Contact {
            fields: std::mem::take(&mut self.fields),
            location: None,
            operator_location: None,
        })
    }

    /// Drop everything collected so far
    pub fn discard(&mut self) {
        self.fields.clear();
    }
}

fn canonical_name(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

// =============================================================================
// Log Format
// =============================================================================

/// Supported input log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogFormat {
    /// Amateur Data Interchange Format (`.adi`/`.adif`)
    Adif,
    /// WSPR spot listing (`ALL_WSPR.TXT`)
    Wspr,
}

impl LogFormat {
    /// Detect format from the file extension: `.txt` is WSPR, anything else ADIF
    pub fn from_path(path: &Path) -> Self {
        let is_wspr = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(constants::WSPR_FILE_EXTENSION));

        if is_wspr {
            LogFormat::Wspr
        } else {
            LogFormat::Adif
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Adif => write!(f, "ADIF"),
            LogFormat::Wspr => write!(f, "WSPR"),
        }
    }
}
