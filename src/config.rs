//! Configuration management and validation.
//!
//! Provides the persisted user settings (`settings.json` with upper-case
//! keys), the runtime date and band filters, and the band colour palette
//! handed to map renderers.

use crate::app::services::grid_converter::{LocatorPrecision, is_valid_locator};
use crate::constants::{
    APP_CONFIG_DIR, DEFAULT_BAND_COLORS, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIRECTORY,
    SETTINGS_FILE_NAME,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// =============================================================================
// Date Filter
// =============================================================================

/// Inclusive calendar-date range; either bound may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateFilter {
    /// Create a validated filter
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Result<Self> {
        let filter = Self {
            start_date,
            end_date,
        };
        filter.validate()?;
        Ok(filter)
    }

    /// Filter that accepts every date
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// At least one bound is set
    pub fn is_active(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    pub fn is_before_start(&self, date: NaiveDate) -> bool {
        self.start_date.is_some_and(|start| date < start)
    }

    pub fn is_after_end(&self, date: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| date > end)
    }

    /// Date lies within both bounds (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_before_start(date) && !self.is_after_end(date)
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(Error::configuration(format!(
                    "Start date {} cannot be after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Band Colours
// =============================================================================

/// Marker colour per band label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandColors(BTreeMap<String, String>);

impl Default for BandColors {
    fn default() -> Self {
        Self(
            DEFAULT_BAND_COLORS
                .iter()
                .map(|(band, color)| (band.to_string(), color.to_string()))
                .collect(),
        )
    }
}

impl BandColors {
    /// Colour for a band label (case-insensitive)
    pub fn color_for(&self, band: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(band))
            .map(|(_, color)| color.as_str())
    }

    pub fn set(&mut self, band: impl Into<String>, color: impl Into<String>) {
        self.0.insert(band.into(), color.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Settings
// =============================================================================

/// User settings
///
/// Persisted fields use upper-case keys, with `DEFAULT_ADIF_FILE` for the log path.
/// Keys this crate does not know (rendering options such as map API keys) are
/// kept in `extra` and written back on save. The date and band filters only
/// exist for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Settings {
    /// Log file read when none is given on the command line
    #[serde(rename = "DEFAULT_ADIF_FILE")]
    pub default_log_file: PathBuf,

    /// Directory for exported contact files
    pub output_directory: PathBuf,

    /// Operator locator used when a contact has no `MY_GRIDSQUARE`
    pub operator_gridsquare: String,

    /// Treat the input as a WSPR spot log
    pub is_wspr: bool,

    /// Marker colours for the renderer
    pub band_colors: BandColors,

    #[serde(skip)]
    pub date_filter: DateFilter,

    /// Keep only contacts on this band
    #[serde(skip)]
    pub band: Option<String>,

    /// Keys owned by other tools sharing the file
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_log_file: PathBuf::from(DEFAULT_LOG_FILE),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            operator_gridsquare: String::new(),
            is_wspr: false,
            band_colors: BandColors::default(),
            date_filter: DateFilter::default(),
            band: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl Settings {
    /// Default settings location: `<config dir>/qso-mapper/settings.json`
    pub fn default_settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(APP_CONFIG_DIR).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from a JSON file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read settings {}", path.display()), e)
        })?;

        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            Error::settings(format!("Invalid settings file {}", path.display()), e)
        })?;

        info!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults (with a warning) on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Error loading settings: {}", e);
            Self::default()
        })
    }

    /// Write the persisted fields as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::settings("Failed to serialize settings", e))?;

        std::fs::write(path, json)
            .map_err(|e| Error::io(format!("Failed to write settings {}", path.display()), e))?;

        info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Operator locator, if configured
    pub fn operator_grid(&self) -> Option<&str> {
        let grid = self.operator_gridsquare.trim();
        (!grid.is_empty()).then_some(grid)
    }

    pub fn with_date_filter(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = date_filter;
        self
    }

    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.band = Some(band.into());
        self
    }

    pub fn with_operator_gridsquare(mut self, grid: impl Into<String>) -> Self {
        self.operator_gridsquare = grid.into();
        self
    }

    /// Validate settings before a run
    pub fn validate(&self) -> Result<()> {
        self.date_filter.validate()?;

        if let Some(grid) = self.operator_grid() {
            if !is_valid_locator(grid, LocatorPrecision::Any) {
                return Err(Error::configuration(format!(
                    "Operator grid square '{}' is not a valid Maidenhead locator",
                    grid
                )));
            }
        }

        if self.band.as_deref().is_some_and(|b| b.trim().is_empty()) {
            return Err(Error::configuration("Band filter cannot be empty"));
        }

        Ok(())
    }
}
