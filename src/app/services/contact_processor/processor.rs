//! Main contact processor implementation and pipeline orchestration

use crate::app::models::{Contact, Coordinates};
use crate::app::services::grid_converter::grid_to_coordinates;
use crate::config::Settings;
use tracing::{info, warn};

use super::{
    enrichment::resolve_coordinates,
    filters::{filter_by_band, filter_mappable},
    stats::{ProcessingResult, ProcessingStats},
};

/// Contact processor for parsed log contacts
///
/// # Example
///
/// ```rust
/// use qso_mapper::app::services::contact_processor::ContactProcessor;
/// use qso_mapper::config::Settings;
///
/// let settings = Settings::default().with_band("20m");
/// let processor = ContactProcessor::from_settings(&settings);
///
/// let result = processor.process_contacts(Vec::new());
/// assert!(result.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactProcessor {
    /// Operator locator applied to contacts without `MY_GRIDSQUARE`
    operator_grid: Option<String>,
    /// Band to keep, all bands when unset
    band: Option<String>,
}

impl ContactProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor configured from the operator grid and band filter of `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            operator_grid: settings.operator_grid().map(str::to_string),
            band: settings.band.clone(),
        }
    }

    pub fn with_operator_grid(mut self, grid: impl Into<String>) -> Self {
        self.operator_grid = Some(grid.into());
        self
    }

    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.band = Some(band.into());
        self
    }

    /// Run contacts through coordinate resolution, band filtering and the
    /// mappable filter
    pub fn process_contacts(&self, contacts: Vec<Contact>) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.total_input = contacts.len();

        info!(
            "Starting contact processing pipeline for {} contacts",
            contacts.len()
        );

        let operator_location = self.operator_location(&mut stats);
        let mut contacts = resolve_coordinates(contacts, operator_location, &mut stats);

        if let Some(band) = self.band.as_deref() {
            contacts = filter_by_band(contacts, band, &mut stats);
        }

        let contacts = filter_mappable(contacts, &mut stats);
        stats.final_output = contacts.len();

        info!("{}", stats.summary());

        ProcessingResult::new(contacts, stats)
    }

    fn operator_location(&self, stats: &mut ProcessingStats) -> Option<Coordinates> {
        let grid = self.operator_grid.as_deref()?;
        match grid_to_coordinates(grid) {
            Ok(location) => Some(location),
            Err(e) => {
                let error_msg = format!("Operator locator: {}", e);
                warn!("{}", error_msg);
                stats.add_error(error_msg);
                None
            }
        }
    }
}
