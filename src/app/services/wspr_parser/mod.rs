//! WSPR spot log parser
//!
//! This module reads whitespace-separated WSPR spot listings with the fixed
//! 12 column layout and projects each spot into the shared contact vocabulary.
//!
//! ## Architecture
//!
//! - [`spot`] - Typed spot line parsing, grid resolution and contact projection
//! - [`parser`] - Line iteration and the chronological date cutoff
//!
//! ## Date filtering
//!
//! Unlike ADIF, a spot dated outside the filter ends the parse: spot logs are
//! written in time order, so everything after the first out-of-range spot is
//! left unread.
//!
//! ## Usage
//!
//! ```rust
//! use qso_mapper::app::services::wspr_parser::WsprParser;
//! use qso_mapper::config::DateFilter;
//!
//! let parser = WsprParser::new(DateFilter::unbounded());
//! let result = parser.parse_str("230615 1200 -21 0.3 14.097065 K1ABC FN42 37 W1AW FN31 123 45\n");
//!
//! assert_eq!(result.contacts[0].band(), Some("20m"));
//! ```

pub mod parser;
pub mod spot;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::WsprParser;
pub use spot::WsprSpot;
