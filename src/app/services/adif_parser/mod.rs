//! ADIF parser for amateur-radio contact logs
//!
//! This module turns ADIF text into [`Contact`](crate::app::models::Contact)
//! records. Parsing is line framed: only physical lines carrying a `<CALL:`
//! tag are data rows, and each such line holds one or more records separated
//! by `<EOR>`. A record left open at the end of its line is still emitted.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Header stripping, data-row detection and tag tokenization
//! - [`parser`] - Record assembly and date filtering
//!
//! ## Usage
//!
//! ```rust
//! use qso_mapper::app::services::adif_parser::AdifParser;
//! use qso_mapper::config::DateFilter;
//!
//! let parser = AdifParser::new(DateFilter::unbounded());
//! let result = parser.parse_str("<call:4>W1AW<qso_date:8>20230615<eor>\n");
//!
//! assert_eq!(result.contacts.len(), 1);
//! assert_eq!(result.contacts[0].call(), Some("W1AW"));
//! ```

pub mod parser;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::AdifParser;
pub use tokenizer::{AdifTag, is_data_row, strip_header, tokenize_line};
