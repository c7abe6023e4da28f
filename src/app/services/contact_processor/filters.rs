//! Band and mappable filtering

use crate::app::models::Contact;
use tracing::{debug, info};

use super::stats::ProcessingStats;

/// Keep only contacts on `band` (case-insensitive)
pub fn filter_by_band(
    contacts: Vec<Contact>,
    band: &str,
    stats: &mut ProcessingStats,
) -> Vec<Contact> {
    let before = contacts.len();
    let kept: Vec<Contact> = contacts
        .into_iter()
        .filter(|contact| matches_band(contact, band))
        .collect();

    stats.band_filtered += before - kept.len();
    info!(
        "Band filter '{}': {} -> {} contacts",
        band.trim(),
        before,
        kept.len()
    );

    kept
}

/// Drop contacts without a valid worked-station location
pub fn filter_mappable(contacts: Vec<Contact>, stats: &mut ProcessingStats) -> Vec<Contact> {
    let before = contacts.len();
    let kept: Vec<Contact> = contacts
        .into_iter()
        .filter(|contact| {
            let mappable = contact.is_mappable();
            if !mappable {
                debug!("Contact {} filtered out: no location", contact.display_call());
            }
            mappable
        })
        .collect();

    stats.unmappable += before - kept.len();
    info!(
        "Mappable filter: {} -> {} contacts ({} without location)",
        before,
        kept.len(),
        before - kept.len()
    );

    kept
}

pub fn matches_band(contact: &Contact, band: &str) -> bool {
    contact
        .band()
        .is_some_and(|b| b.eq_ignore_ascii_case(band.trim()))
}
