//! Locator to coordinate resolution for contacts
//!
//! Conversion failures are contact-scoped: the contact keeps its fields and
//! simply has no coordinates attached.

use crate::app::models::{Contact, Coordinates};
use crate::app::services::grid_converter::grid_to_coordinates;
use crate::constants::{WSPR_MODE, fields};
use tracing::{debug, warn};

use super::stats::ProcessingStats;

/// Resolve coordinates for every contact
///
/// # Arguments
///
/// * `contacts` - Contacts as produced by a parser
/// * `operator_location` - Fallback for contacts without `MY_GRIDSQUARE`
/// * `stats` - Mutable reference to processing statistics
pub fn resolve_coordinates(
    contacts: Vec<Contact>,
    operator_location: Option<Coordinates>,
    stats: &mut ProcessingStats,
) -> Vec<Contact> {
    let resolved: Vec<Contact> = contacts
        .into_iter()
        .map(|contact| resolve_contact(contact, operator_location, stats))
        .collect();

    debug!(
        "Coordinate resolution: {} contacts, {} located, {} with operator location",
        resolved.len(),
        stats.located,
        stats.operator_located
    );

    resolved
}

/// Resolve both ends of a single contact
///
/// An existing location is kept as is. The operator end prefers the
/// contact's own `MY_GRIDSQUARE` and falls back to `operator_location`.
/// WSPR spots have already had their receiver locator converted by the spot
/// parser, so it is not converted again.
pub fn resolve_contact(
    contact: Contact,
    operator_location: Option<Coordinates>,
    stats: &mut ProcessingStats,
) -> Contact {
    let mut contact = contact;

    if contact.location().is_none() {
        match contact.gridsquare().map(grid_to_coordinates) {
            Some(Ok(location)) => contact = contact.with_location(location),
            Some(Err(e)) => record_failure(&contact, &e.to_string(), stats),
            None => {}
        }
    }

    if contact.operator_location().is_none() {
        let own = own_gridsquare(&contact).and_then(|grid| {
            grid_to_coordinates(grid)
                .map_err(|e| record_failure(&contact, &e.to_string(), stats))
                .ok()
        });
        if let Some(location) = own.or(operator_location) {
            contact = contact.with_operator_location(location);
        }
    }

    if contact.location().is_some() {
        stats.located += 1;
    }
    if contact.operator_location().is_some() {
        stats.operator_located += 1;
    }

    contact
}

fn own_gridsquare(contact: &Contact) -> Option<&str> {
    if contact.get(fields::MODE) == Some(WSPR_MODE) {
        return None;
    }
    contact.my_gridsquare()
}

fn record_failure(contact: &Contact, message: &str, stats: &mut ProcessingStats) {
    let error_msg = format!("Contact {}: {}", contact.display_call(), message);
    warn!("{}", error_msg);
    stats.add_error(error_msg);
}
