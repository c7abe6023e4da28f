//! Individual WSPR spot line parsing
//!
//! This module handles splitting one spot line into typed columns, resolving
//! the transmitter and receiver locators, and projecting the spot onto the
//! contact field vocabulary.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::app::models::{Contact, Coordinates};
use crate::app::services::band_classifier;
use crate::app::services::grid_converter::{LocatorPrecision, grid_to_coordinates, is_valid_locator};
use crate::constants::{
    ADIF_DATE_FORMAT, WSPR_CENTURY_PREFIX, WSPR_MIN_FIELDS, WSPR_MODE, fields, wspr_column,
};
use crate::{Error, Result};

/// One parsed WSPR spot
#[derive(Debug, Clone, PartialEq)]
pub struct WsprSpot {
    /// Raw `YYMMDD` date token
    pub date: String,

    /// Raw `HHMM` time token
    pub time: String,

    /// Expanded calendar date, when the date token parses
    pub spot_date: Option<NaiveDate>,

    pub snr: f64,
    pub drift: f64,

    /// Frequency in MHz
    pub frequency: f64,

    pub tx_call: String,

    /// Transmitter locator, empty when it failed validation
    pub tx_grid: String,
    pub tx_location: Option<Coordinates>,

    pub tx_power: String,
    pub rx_call: String,
    pub rx_grid: String,
    pub rx_location: Option<Coordinates>,

    /// Path length in km, 0 when not numeric
    pub distance: u32,

    /// Bearing in degrees, 0 when absent or not numeric
    pub azimuth: u32,
}

impl WsprSpot {
    /// Parse one spot line
    ///
    /// Lines with fewer than the fixed column count, and lines whose numeric
    /// columns do not parse, are format errors. A transmitter locator that is
    /// not a 4 or 6 character Maidenhead locator is cleared. The receiver
    /// locator is converted without that check.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < WSPR_MIN_FIELDS {
            return Err(Error::wspr_format(
                line_number,
                format!(
                    "expected at least {} fields, found {}",
                    WSPR_MIN_FIELDS,
                    parts.len()
                ),
            ));
        }

        let date = parts[wspr_column::DATE].to_string();
        let spot_date = expand_spot_date(&date);
        if spot_date.is_none() {
            debug!("Line {}: unparsable spot date '{}'", line_number, date);
        }

        let snr = parse_float(parts[wspr_column::SNR], "snr", line_number)?;
        let drift = parse_float(parts[wspr_column::DRIFT], "drift", line_number)?;
        let frequency = parse_float(parts[wspr_column::FREQUENCY], "frequency", line_number)?;

        let tx_call = parts[wspr_column::TX_CALL].to_string();
        let (tx_grid, tx_location) = resolve_tx_grid(parts[wspr_column::TX_GRID], &tx_call);

        let rx_call = parts[wspr_column::RX_CALL].to_string();
        let rx_grid = parts[wspr_column::RX_GRID].to_string();
        let rx_location = match grid_to_coordinates(&rx_grid) {
            Ok(location) => Some(location),
            Err(e) => {
                warn!("Receiver {}: {}", rx_call, e);
                None
            }
        };

        Ok(Self {
            date,
            time: parts[wspr_column::TIME].to_string(),
            spot_date,
            snr,
            drift,
            frequency,
            tx_call,
            tx_grid,
            tx_location,
            tx_power: parts[wspr_column::TX_POWER].to_string(),
            rx_call,
            rx_grid,
            rx_location,
            distance: parse_count(parts[wspr_column::DISTANCE]),
            azimuth: parse_count(parts[wspr_column::AZIMUTH]),
        })
    }

    /// Amateur band of the spot frequency, empty when out of range
    pub fn band(&self) -> &'static str {
        band_classifier::classify(self.frequency)
    }

    /// Project the spot onto the contact field vocabulary
    ///
    /// The transmitter is the worked station; the receiver is the operator.
    pub fn into_contact(self) -> Contact {
        let qso_date = self
            .spot_date
            .map(|d| d.format(ADIF_DATE_FORMAT).to_string())
            .unwrap_or_else(|| self.date.clone());

        let contact = Contact::from_fields([
            (fields::CALL, self.tx_call.clone()),
            (fields::GRIDSQUARE, self.tx_grid.clone()),
            (fields::QSO_DATE, qso_date),
            (fields::TIME_ON, self.time.clone()),
            (fields::BAND, self.band().to_string()),
            (fields::MODE, WSPR_MODE.to_string()),
            (fields::FREQ, self.frequency.to_string()),
            (fields::TX_PWR, self.tx_power.clone()),
            (fields::STATION_CALLSIGN, self.rx_call.clone()),
            (fields::MY_GRIDSQUARE, self.rx_grid.clone()),
            (fields::DISTANCE, self.distance.to_string()),
            (fields::ANT_AZ, self.azimuth.to_string()),
            (fields::SNR, self.snr.to_string()),
            (fields::DRIFT, self.drift.to_string()),
        ]);

        let contact = match self.tx_location {
            Some(location) => contact.with_location(location),
            None => contact,
        };
        match self.rx_location {
            Some(location) => contact.with_operator_location(location),
            None => contact,
        }
    }
}

/// Expand a two-digit-year `YYMMDD` token to a date in the 2000s
pub fn expand_spot_date(token: &str) -> Option<NaiveDate> {
    let expanded = format!("{}{}", WSPR_CENTURY_PREFIX, token);
    NaiveDate::parse_from_str(&expanded, ADIF_DATE_FORMAT).ok()
}

fn resolve_tx_grid(token: &str, tx_call: &str) -> (String, Option<Coordinates>) {
    let grid = token.trim();
    if !is_valid_locator(grid, LocatorPrecision::SquareOrSubsquare) {
        warn!("Transmitter {}: ignoring invalid grid '{}'", tx_call, grid);
        return (String::new(), None);
    }

    match grid_to_coordinates(grid) {
        Ok(location) => (grid.to_string(), Some(location)),
        Err(e) => {
            warn!("Transmitter {}: {}", tx_call, e);
            (grid.to_string(), None)
        }
    }
}

fn parse_float(token: &str, column: &str, line_number: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|e| {
        Error::wspr_format(
            line_number,
            format!("invalid {} '{}': {}", column, token, e),
        )
    })
}

/// All-digit tokens parse as integers; anything else counts as 0
fn parse_count(token: &str) -> u32 {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().unwrap_or(0)
    } else {
        0
    }
}
