//! Maidenhead grid locator conversion
//!
//! Converts 2, 4 or 6 character Maidenhead locators into the centre point of
//! the cell they name, in decimal degrees.
//!
//! | Pair      | Characters | Cell size (lon x lat) |
//! |-----------|------------|-----------------------|
//! | field     | `A`-`R`    | 20° x 10°             |
//! | square    | `0`-`9`    | 2° x 1°               |
//! | subsquare | `A`-`X`    | 5' x 2.5'             |

use crate::app::models::Coordinates;
use crate::constants::{COORDINATE_DECIMALS, MAIDENHEAD_PATTERN, MAIDENHEAD_SQUARE_PATTERN};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static LOCATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAIDENHEAD_PATTERN).expect("valid Maidenhead pattern"));

static SQUARE_LOCATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAIDENHEAD_SQUARE_PATTERN).expect("valid Maidenhead pattern"));

/// Precision accepted by [`is_valid_locator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorPrecision {
    /// Field, square or subsquare (2/4/6 characters)
    Any,
    /// Square or subsquare only (4/6 characters)
    SquareOrSubsquare,
}

/// Check a locator against the Maidenhead pattern (case-insensitive, untrimmed)
pub fn is_valid_locator(locator: &str, precision: LocatorPrecision) -> bool {
    match precision {
        LocatorPrecision::Any => LOCATOR_RE.is_match(locator),
        LocatorPrecision::SquareOrSubsquare => SQUARE_LOCATOR_RE.is_match(locator),
    }
}

/// Convert a Maidenhead locator to the centre of its finest cell
///
/// The input is trimmed and upper-cased. Characters past the sixth are
/// ignored, as is the odd trailing character of a 3 or 5 character input.
pub fn grid_to_coordinates(locator: &str) -> Result<Coordinates> {
    let grid: Vec<char> = locator.trim().to_ascii_uppercase().chars().collect();

    if grid.len() < 2 {
        return Err(Error::grid_conversion(
            locator,
            "locator must have at least 2 characters",
        ));
    }

    let mut lon = letter_index(locator, grid[0], 'R')? * 20.0;
    let mut lat = letter_index(locator, grid[1], 'R')? * 10.0;

    if grid.len() >= 4 {
        lon += digit_value(locator, grid[2])? * 2.0;
        lat += digit_value(locator, grid[3])?;
    }

    if grid.len() >= 6 {
        lon += letter_index(locator, grid[4], 'X')? / 12.0;
        lat += letter_index(locator, grid[5], 'X')? / 24.0;
    }

    let mut longitude = lon - 180.0;
    let mut latitude = lat - 90.0;

    // Centre of the finest cell present
    if grid.len() >= 6 {
        longitude += 1.0 / 24.0;
        latitude += 1.0 / 48.0;
    } else if grid.len() >= 4 {
        longitude += 1.0;
        latitude += 0.5;
    } else {
        longitude += 10.0;
        latitude += 5.0;
    }

    Ok(Coordinates::new(latitude, longitude).rounded(COORDINATE_DECIMALS))
}

fn letter_index(locator: &str, c: char, last: char) -> Result<f64> {
    if ('A'..=last).contains(&c) {
        Ok((c as u32 - 'A' as u32) as f64)
    } else {
        Err(Error::grid_conversion(
            locator,
            format!("'{}' is not a letter in A-{}", c, last),
        ))
    }
}

fn digit_value(locator: &str, c: char) -> Result<f64> {
    c.to_digit(10)
        .map(f64::from)
        .ok_or_else(|| Error::grid_conversion(locator, format!("'{}' is not a digit", c)))
}
