//! Frequency to amateur band classification

use crate::constants::BAND_PLAN;

/// Classify a frequency in MHz into an amateur band label
///
/// Returns an empty string when the frequency falls outside every bracket of
/// [`BAND_PLAN`] (at or below zero, at or above 145 MHz, or NaN).
pub fn classify(frequency_mhz: f64) -> &'static str {
    if frequency_mhz.is_nan() || frequency_mhz <= 0.0 {
        return "";
    }

    BAND_PLAN
        .iter()
        .find(|(lower, upper, _)| frequency_mhz >= *lower && frequency_mhz < *upper)
        .map(|(_, _, band)| *band)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_wspr_frequencies() {
        assert_eq!(classify(1.8366), "160m");
        assert_eq!(classify(3.5686), "80m");
        assert_eq!(classify(5.3647), "60m");
        assert_eq!(classify(7.0386), "40m");
        assert_eq!(classify(10.1387), "30m");
        assert_eq!(classify(14.0956), "20m");
        assert_eq!(classify(18.1046), "17m");
        assert_eq!(classify(21.0946), "15m");
        assert_eq!(classify(24.9246), "12m");
        assert_eq!(classify(28.1246), "10m");
        assert_eq!(classify(50.293), "6m");
        assert_eq!(classify(144.489), "2m");
    }

    #[test]
    fn test_bracket_edges_are_half_open() {
        assert_eq!(classify(14.0), "20m");
        assert_eq!(classify(13.999_999), "30m");
        assert_eq!(classify(3.0), "80m");
        assert_eq!(classify(52.0), "2m");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(classify(0.0), "");
        assert_eq!(classify(-7.0), "");
        assert_eq!(classify(145.0), "");
        assert_eq!(classify(200.0), "");
        assert_eq!(classify(f64::NAN), "");
    }
}
