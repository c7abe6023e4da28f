//! Contact processing module
//!
//! This module takes contacts straight out of a log parser and prepares them
//! for map rendering: it resolves Maidenhead locators to coordinates, applies
//! the optional band filter and drops contacts that cannot be placed on a map.
//!
//! # Architecture
//!
//! - [`processor`] - Main ContactProcessor struct and pipeline orchestration
//! - [`enrichment`] - Locator to coordinate resolution for both ends of a contact
//! - [`filters`] - Band and mappable filtering
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Coordinate Resolution**: `GRIDSQUARE` becomes `LATITUDE`/`LONGITUDE`;
//!    `MY_GRIDSQUARE` or the operator locator becomes `MY_LATITUDE`/`MY_LONGITUDE`
//! 2. **Band Filtering**: Keep only the requested band, when one is set
//! 3. **Mappable Filtering**: Drop contacts without a valid location
//!
//! Contacts that already carry a location (WSPR spots) pass through step 1
//! unchanged.
//!
//! # Example Usage
//!
//! ```rust
//! use qso_mapper::app::models::Contact;
//! use qso_mapper::app::services::contact_processor::ContactProcessor;
//!
//! let contacts = vec![Contact::from_fields([("CALL", "W1AW"), ("GRIDSQUARE", "FN31pr")])];
//! let processor = ContactProcessor::new().with_operator_grid("FN20");
//!
//! let result = processor.process_contacts(contacts);
//! assert_eq!(result.contact_count(), 1);
//! println!("{}", result.summary());
//! ```

pub mod enrichment;
pub mod filters;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::ContactProcessor;
pub use stats::{ProcessingResult, ProcessingStats};

pub use enrichment::{resolve_contact, resolve_coordinates};
pub use filters::{filter_by_band, filter_mappable, matches_band};
