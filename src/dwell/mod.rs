//! Dwell-time classification.
//!
//! Maps an on-screen dwell time to a qualitative familiarity band. Pure and
//! total: every finite non-negative input lands in exactly one band.
//! Negative input is a caller contract violation; clamp to 0 before calling.

use serde::{Deserialize, Serialize};

/// Band boundaries in seconds, lower inclusive, upper exclusive
pub const VERY_FAST_UPPER: f64 = 2.0;
pub const FAST_UPPER: f64 = 5.0;
pub const MEDIUM_UPPER: f64 = 8.0;
pub const SLOW_UPPER: f64 = 10.0;

/// Qualitative familiarity band, ordered fastest (most familiar) first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DwellBand {
    /// [0, 2): very familiar
    VeryFast,
    /// [2, 5): familiar
    Fast,
    /// [5, 8): borderline
    Medium,
    /// [8, 10): unfamiliar
    Slow,
    /// [10, ∞): very unfamiliar
    VerySlow,
}

impl DwellBand {
    /// All bands in order, fastest first
    pub const ALL: [DwellBand; 5] = [
        DwellBand::VeryFast,
        DwellBand::Fast,
        DwellBand::Medium,
        DwellBand::Slow,
        DwellBand::VerySlow,
    ];

    /// Classify a dwell time into its band
    pub fn classify(dwell_seconds: f64) -> Self {
        if dwell_seconds < VERY_FAST_UPPER {
            DwellBand::VeryFast
        } else if dwell_seconds < FAST_UPPER {
            DwellBand::Fast
        } else if dwell_seconds < MEDIUM_UPPER {
            DwellBand::Medium
        } else if dwell_seconds < SLOW_UPPER {
            DwellBand::Slow
        } else {
            DwellBand::VerySlow
        }
    }

    /// Human-readable familiarity label for reports
    pub fn familiarity_label(&self) -> &'static str {
        match self {
            DwellBand::VeryFast => "very familiar",
            DwellBand::Fast => "familiar",
            DwellBand::Medium => "borderline",
            DwellBand::Slow => "unfamiliar",
            DwellBand::VerySlow => "very unfamiliar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(DwellBand::classify(0.0), DwellBand::VeryFast);
        assert_eq!(DwellBand::classify(1.999), DwellBand::VeryFast);
        assert_eq!(DwellBand::classify(2.0), DwellBand::Fast);
        assert_eq!(DwellBand::classify(4.999), DwellBand::Fast);
        assert_eq!(DwellBand::classify(5.0), DwellBand::Medium);
        assert_eq!(DwellBand::classify(7.999), DwellBand::Medium);
        assert_eq!(DwellBand::classify(8.0), DwellBand::Slow);
        assert_eq!(DwellBand::classify(9.999), DwellBand::Slow);
        assert_eq!(DwellBand::classify(10.0), DwellBand::VerySlow);
        assert_eq!(DwellBand::classify(600.0), DwellBand::VerySlow);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = DwellBand::ALL.iter().map(|b| b.familiarity_label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    proptest! {
        // Band totality: every non-negative dwell maps to exactly one band,
        // and the band agrees with its declared interval.
        #[test]
        fn classify_is_total_and_exhaustive(dwell in 0.0f64..1e6) {
            let band = DwellBand::classify(dwell);
            let expected = if dwell < VERY_FAST_UPPER {
                DwellBand::VeryFast
            } else if dwell < FAST_UPPER {
                DwellBand::Fast
            } else if dwell < MEDIUM_UPPER {
                DwellBand::Medium
            } else if dwell < SLOW_UPPER {
                DwellBand::Slow
            } else {
                DwellBand::VerySlow
            };
            prop_assert_eq!(band, expected);
        }
    }
}
