//! QSO Mapper Library
//!
//! A Rust library for turning amateur-radio contact logs into normalized,
//! geolocated contact records ready for map rendering.
//!
//! This library provides tools for:
//! - Parsing ADIF logs with line-framed tag tokenization and `<EOR>` record assembly
//! - Parsing WSPR spot logs with fixed-column layout and a chronological date cutoff
//! - Converting Maidenhead grid locators to latitude/longitude
//! - Classifying frequencies into amateur bands
//! - Resolving contact and operator coordinates and filtering mappable contacts
//! - Record-scoped error handling that never aborts a multi-record parse

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adif_parser;
        pub mod band_classifier;
        pub mod contact_processor;
        pub mod grid_converter;
        pub mod parse_result;
        pub mod wspr_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Contact, ContactBuilder, Coordinates, LogFormat};
pub use app::services::parse_result::{ParseResult, ParseStats};
pub use config::{DateFilter, Settings};

/// Result type alias for QSO Mapper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for log parsing and coordinate resolution
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Malformed ADIF data row
    #[error("ADIF format error on line {line}: {message}")]
    AdifFormat { line: usize, message: String },

    /// Malformed WSPR spot line
    #[error("WSPR format error on line {line}: {message}")]
    WsprFormat { line: usize, message: String },

    /// Grid locator could not be converted to coordinates
    #[error("Cannot convert grid locator '{locator}': {message}")]
    GridConversion { locator: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Settings file could not be (de)serialized
    #[error("Settings error: {message}")]
    Settings {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an ADIF format error for a 1-based line number
    pub fn adif_format(line: usize, message: impl Into<String>) -> Self {
        Self::AdifFormat {
            line,
            message: message.into(),
        }
    }

    /// Create a WSPR format error for a 1-based line number
    pub fn wspr_format(line: usize, message: impl Into<String>) -> Self {
        Self::WsprFormat {
            line,
            message: message.into(),
        }
    }

    /// Create a grid conversion error
    pub fn grid_conversion(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GridConversion {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a settings (de)serialization error
    pub fn settings(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Settings {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Settings {
            message: "Settings serialization failed".to_string(),
            source: error,
        }
    }
}
