//! ADIF tag tokenization
//!
//! A tag is `<NAME>`, `<NAME:LENGTH>` or `<NAME:LENGTH:TYPE>`. Its value is
//! the text after the closing `>` up to the next tag or the end of the line.
//! Declared lengths are reported but never enforced.

use crate::constants::{ADIF_DATA_ROW_MARKER, ADIF_END_OF_HEADER, ADIF_TAG_PATTERN};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ADIF_TAG_PATTERN).expect("valid ADIF tag pattern"));

/// One tag and its value from a data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdifTag<'a> {
    /// Upper-cased field name
    pub name: String,

    /// Length declared in the tag, if any
    pub declared_length: Option<usize>,

    /// Value text, trimmed
    pub value: &'a str,
}

/// Text following the first `<EOH>` marker, or the whole text if there is none
pub fn strip_header(text: &str) -> &str {
    // ASCII upper-casing keeps byte offsets aligned with the input
    match text.to_ascii_uppercase().find(ADIF_END_OF_HEADER) {
        Some(pos) => &text[pos + ADIF_END_OF_HEADER.len()..],
        None => text,
    }
}

/// Whether a physical line is a data row (contains `<CALL:`, case-insensitive)
pub fn is_data_row(line: &str) -> bool {
    line.to_ascii_uppercase().contains(ADIF_DATA_ROW_MARKER)
}

/// Split one line into tags in left-to-right order
///
/// Text before the first tag is ignored. Anything between tags that does not
/// itself form a tag (a stray `<`, say) stays part of the preceding value.
pub fn tokenize_line(line: &str) -> Vec<AdifTag<'_>> {
    let captures: Vec<_> = TAG_RE.captures_iter(line).collect();
    let mut tags = Vec::with_capacity(captures.len());

    for (i, caps) in captures.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let value_end = captures
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(line.len(), |next| next.start());

        tags.push(AdifTag {
            name: caps[1].to_ascii_uppercase(),
            declared_length: caps.get(2).and_then(|len| len.as_str().parse().ok()),
            value: line[whole.end()..value_end].trim(),
        });
    }

    tags
}
