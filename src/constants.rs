//! Application constants for QSO Mapper
//!
//! This module contains the field vocabulary, format constants, band plan,
//! default settings values and colour palette used throughout the application.

// =============================================================================
// Contact Field Vocabulary
// =============================================================================

/// Canonical (upper-case) ADIF field names produced or consumed by the core
pub mod fields {
    pub const CALL: &str = "CALL";
    pub const QSO_DATE: &str = "QSO_DATE";
    pub const TIME_ON: &str = "TIME_ON";
    pub const BAND: &str = "BAND";
    pub const MODE: &str = "MODE";
    pub const FREQ: &str = "FREQ";
    pub const GRIDSQUARE: &str = "GRIDSQUARE";
    pub const MY_GRIDSQUARE: &str = "MY_GRIDSQUARE";
    pub const STATION_CALLSIGN: &str = "STATION_CALLSIGN";
    pub const TX_PWR: &str = "TX_PWR";
    pub const DISTANCE: &str = "DISTANCE";
    pub const ANT_AZ: &str = "ANT_AZ";
    pub const SNR: &str = "SNR";
    pub const DRIFT: &str = "DRIFT";

    /// Computed coordinate keys (emitted on serialization only)
    pub const LATITUDE: &str = "LATITUDE";
    pub const LONGITUDE: &str = "LONGITUDE";
    pub const MY_LATITUDE: &str = "MY_LATITUDE";
    pub const MY_LONGITUDE: &str = "MY_LONGITUDE";
}

// =============================================================================
// ADIF Format
// =============================================================================

/// Control tag terminating a record
pub const ADIF_END_OF_RECORD: &str = "EOR";

/// Control tag terminating the file header
pub const ADIF_END_OF_HEADER: &str = "<EOH>";

/// Marker a physical line must contain (case-insensitive) to be a data row
pub const ADIF_DATA_ROW_MARKER: &str = "<CALL:";

/// Tag pattern: `<NAME>`, `<NAME:LEN>` or `<NAME:LEN:TYPE>`
pub const ADIF_TAG_PATTERN: &str = r"<([A-Za-z0-9_]+)(?::(\d+)(?::[A-Za-z])?)?>";

/// QSO_DATE storage format
pub const ADIF_DATE_FORMAT: &str = "%Y%m%d";

// =============================================================================
// WSPR Format
// =============================================================================

/// Fixed WSPR spot column layout, in the positions the spot parser reads
pub const WSPR_COLUMNS: &[&str] = &[
    "date", "time", "snr", "drift", "frequency", "tx_call", "tx_grid", "tx_power", "rx_call",
    "rx_grid", "distance", "azimuth",
];

/// Minimum number of whitespace-separated tokens for a spot line
pub const WSPR_MIN_FIELDS: usize = WSPR_COLUMNS.len();

/// Column positions as consumed by the spot parser
pub mod wspr_column {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const SNR: usize = 2;
    /// WSJT-X writes the time offset here
    pub const DRIFT: usize = 3;
    /// Dial frequency in MHz
    pub const FREQUENCY: usize = 4;
    pub const TX_CALL: usize = 5;
    pub const TX_GRID: usize = 6;
    pub const TX_POWER: usize = 7;
    pub const RX_CALL: usize = 8;
    pub const RX_GRID: usize = 9;
    pub const DISTANCE: usize = 10;
    pub const AZIMUTH: usize = 11;
}

/// Century prefix applied to the two-digit WSPR year
pub const WSPR_CENTURY_PREFIX: &str = "20";

/// Mode label attached to every WSPR contact
pub const WSPR_MODE: &str = "WSPR";

// =============================================================================
// Maidenhead Locator Patterns
// =============================================================================

/// Field, optional square, optional subsquare (2/4/6 characters)
pub const MAIDENHEAD_PATTERN: &str = r"(?i)^[A-R]{2}(?:[0-9]{2}(?:[A-X]{2})?)?$";

/// Field + square, optional subsquare (4/6 characters)
pub const MAIDENHEAD_SQUARE_PATTERN: &str = r"(?i)^[A-R]{2}[0-9]{2}(?:[A-X]{2})?$";

/// Decimal places kept on converted coordinates
pub const COORDINATE_DECIMALS: i32 = 6;

// =============================================================================
// Band Plan
// =============================================================================

/// Ordered half-open frequency brackets in MHz: `[lower, upper) -> band`
///
/// The first bracket is open at zero as well: 0 MHz is not 160m.
pub const BAND_PLAN: &[(f64, f64, &str)] = &[
    (0.0, 3.0, "160m"),
    (3.0, 5.0, "80m"),
    (5.0, 7.0, "60m"),
    (7.0, 10.0, "40m"),
    (10.0, 14.0, "30m"),
    (14.0, 18.0, "20m"),
    (18.0, 21.0, "17m"),
    (21.0, 24.0, "15m"),
    (24.0, 28.0, "12m"),
    (28.0, 30.0, "10m"),
    (30.0, 52.0, "6m"),
    (52.0, 145.0, "2m"),
];

/// Default marker colours per band label
pub const DEFAULT_BAND_COLORS: &[(&str, &str)] = &[
    ("2200m", "#ff4500"),
    ("600m", "#1e90ff"),
    ("160m", "#7cfc00"),
    ("80m", "#e550e5"),
    ("60m", "#00008b"),
    ("40m", "#5959ff"),
    ("30m", "#62d962"),
    ("20m", "#f2c40c"),
    ("17m", "#f2f261"),
    ("15m", "#cca166"),
    ("12m", "#b22222"),
    ("11m", "#00ff00"),
    ("10m", "#ff69b4"),
    ("8m", "#7f00f1"),
    ("6m", "#FF0000"),
    ("5m", "#e0e0e0"),
    ("2m", "#FF1493"),
    ("2.4Ghz", "#FF7F50"),
    ("10Ghz", "#696969"),
];

// =============================================================================
// Settings Defaults
// =============================================================================

/// Log file used when none is given on the command line
pub const DEFAULT_LOG_FILE: &str = "contacts.adi";

/// Directory for exported contact files
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "maps";

/// Application directory under the user config dir
pub const APP_CONFIG_DIR: &str = "qso-mapper";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File extension treated as a WSPR spot log when the format is auto-detected
pub const WSPR_FILE_EXTENSION: &str = "txt";
