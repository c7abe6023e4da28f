//! Command-line argument definitions for QSO Mapper
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::LogFormat;
use crate::config::{DateFilter, Settings};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the contact log mapper
///
/// Parses ADIF or WSPR logs into normalized, geolocated contacts and exports
/// the mappable ones as JSON for a map renderer.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "qso-mapper",
    version,
    about = "Parse ADIF and WSPR logs into geolocated contacts for mapping",
    long_about = "Reads an amateur-radio contact log (ADIF) or WSPR spot listing, resolves \
                  Maidenhead grid locators to latitude/longitude, applies optional date and band \
                  filters, and exports the contacts that can be placed on a map as JSON."
)]
pub struct Args {
    /// Log file to parse
    ///
    /// Defaults to the DEFAULT_ADIF_FILE setting when omitted.
    #[arg(value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Input log format
    ///
    /// `auto` uses the IS_WSPR setting, then the file extension (`.txt` is WSPR).
    #[arg(
        long = "format",
        value_enum,
        default_value = "auto",
        help = "Input log format"
    )]
    pub format: FormatArg,

    /// Earliest contact date to keep (inclusive)
    #[arg(
        long = "start-date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Earliest contact date to keep (inclusive)"
    )]
    pub start_date: Option<NaiveDate>,

    /// Latest contact date to keep (inclusive)
    #[arg(
        long = "end-date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Latest contact date to keep (inclusive)"
    )]
    pub end_date: Option<NaiveDate>,

    /// Keep only contacts on this band (e.g. 20m)
    #[arg(long = "band", value_name = "LABEL")]
    pub band: Option<String>,

    /// Operator grid locator, overriding OPERATOR_GRIDSQUARE
    #[arg(long = "operator-grid", value_name = "LOCATOR")]
    pub operator_grid: Option<String>,

    /// Path to settings file
    ///
    /// JSON settings file. If not specified, uses
    /// <config dir>/qso-mapper/settings.json
    #[arg(
        short = 'c',
        long = "settings",
        value_name = "FILE",
        help = "Path to settings file (JSON format)"
    )]
    pub settings_file: Option<PathBuf>,

    /// Persist the effective settings after applying command-line overrides
    #[arg(long = "save-settings")]
    pub save_settings: bool,

    /// Write the mappable contacts to this JSON file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export mappable contacts to OUTPUT_DIRECTORY with a timestamped name
    #[arg(long = "export")]
    pub export: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Log format selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Choose from settings and file extension
    Auto,
    /// ADIF contact log
    Adif,
    /// WSPR spot listing
    Wspr,
}

impl FormatArg {
    /// Resolve to a concrete format: explicit choice, then IS_WSPR, then extension
    pub fn resolve(self, settings: &Settings, log_file: &Path) -> LogFormat {
        match self {
            FormatArg::Adif => LogFormat::Adif,
            FormatArg::Wspr => LogFormat::Wspr,
            FormatArg::Auto if settings.is_wspr => LogFormat::Wspr,
            FormatArg::Auto => LogFormat::from_path(log_file),
        }
    }
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.date_filter()?;

        if let Some(band) = &self.band {
            if band.trim().is_empty() {
                return Err(Error::configuration("Band filter cannot be empty"));
            }
        }

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is a directory: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    /// Date filter built from `--start-date` and `--end-date`
    pub fn date_filter(&self) -> Result<DateFilter> {
        DateFilter::new(self.start_date, self.end_date)
    }

    /// Whether contacts should be written to a JSON file
    pub fn wants_export(&self) -> bool {
        self.export || self.output.is_some()
    }

    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should print the run summary (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        Error::datetime_parsing(format!("Invalid date '{}', expected YYYY-MM-DD", value), e)
    })
}
