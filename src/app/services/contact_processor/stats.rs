//! Processing statistics and result structures for the contact pipeline

use crate::app::models::Contact;

/// Statistics for contact processing operations
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ProcessingStats {
    /// Number of contacts handed to the pipeline
    pub total_input: usize,
    /// Contacts carrying a worked-station location after resolution
    pub located: usize,
    /// Contacts carrying an operator location after resolution
    pub operator_located: usize,
    /// Contacts removed by the band filter
    pub band_filtered: usize,
    /// Contacts removed for lacking a valid location
    pub unmappable: usize,
    /// Contacts in the final output
    pub final_output: usize,
    /// Per-contact conversion failures
    pub error_messages: Vec<String>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String) {
        self.error_messages.push(message);
    }

    pub fn error_count(&self) -> usize {
        self.error_messages.len()
    }

    /// Share of input contacts that made it to the output, as a percentage
    pub fn output_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.final_output as f64 / self.total_input as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} contacts ({:.1}%) | Located: {} | \
             Band filtered: {} | Unmappable: {} | Conversion errors: {}",
            self.total_input,
            self.final_output,
            self.output_rate(),
            self.located,
            self.band_filtered,
            self.unmappable,
            self.error_count()
        )
    }
}

/// Result of contact processing
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Mappable contacts in input order
    pub contacts: Vec<Contact>,
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    pub fn new(contacts: Vec<Contact>, stats: ProcessingStats) -> Self {
        Self { contacts, stats }
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
