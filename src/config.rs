//! Configuration surface for the scheduling engine.
//!
//! Every tunable has a documented default; callers construct a config once
//! and pass it by reference into the pure algorithm functions.

use serde::{Deserialize, Serialize};

/// Dwell-time thresholds (seconds) separating familiarity bands.
/// Half-open bins: `[0, very_familiar)`, `[very_familiar, familiar)`,
/// `[familiar, unfamiliar)`, `[unfamiliar, ∞)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DwellThresholds {
    pub very_familiar: f64,
    pub familiar: f64,
    pub unfamiliar: f64,
}

impl Default for DwellThresholds {
    fn default() -> Self {
        Self {
            very_familiar: 2.0,
            familiar: 5.0,
            unfamiliar: 8.0,
        }
    }
}

/// Tunables for the exposure strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureConfig {
    pub thresholds: DwellThresholds,
    /// Target exposures when average dwell lands in the very-familiar band
    pub very_familiar_exposures: u32,
    /// Target exposures for the familiar band
    pub familiar_exposures: u32,
    /// Target exposures for the unfamiliar band
    pub unfamiliar_exposures: u32,
    /// Target exposures beyond the unfamiliar threshold
    pub very_unfamiliar_exposures: u32,
    /// Adjustment per unit of right-swipe dominance (negative: fewer exposures)
    pub right_bonus: i32,
    /// Adjustment per unit of left-swipe dominance (positive: more exposures)
    pub left_penalty: i32,
    /// Hard lower clamp on the computed target
    pub min_exposures: u32,
    /// Hard upper clamp on the computed target
    pub max_exposures: u32,
    /// Right-swipe count at which a very-familiar word may stop early
    pub early_mastery_right_count: u32,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            thresholds: DwellThresholds::default(),
            very_familiar_exposures: 3,
            familiar_exposures: 5,
            unfamiliar_exposures: 7,
            very_unfamiliar_exposures: 10,
            right_bonus: -1,
            left_penalty: 2,
            min_exposures: 2,
            max_exposures: 15,
            early_mastery_right_count: 3,
        }
    }
}

/// Tunables for the batch dwell-time analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Records with fewer total exposures are dropped from the analysis
    pub minimum_exposures: u32,
    /// Keep records whose average dwell is exactly zero (never-dwelled noise)
    pub include_zero_dwell: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            minimum_exposures: 1,
            include_zero_dwell: false,
        }
    }
}

/// Tunables for the multi-day task planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Maximum words pulled into a day's review list
    pub daily_review_count: usize,
    /// Planned exposures per new word
    pub new_word_exposure_multiplier: u32,
    /// Planned exposures per review word
    pub review_word_exposure_multiplier: u32,
    /// Fraction of plan days that carry front-loaded new material
    pub front_day_ratio: f64,
    /// Fraction of the vocabulary assigned to the front-loaded days
    pub front_word_ratio: f64,
    /// Above this missing fraction, word-text resolution fails hard
    pub max_missing_word_ratio: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_review_count: 20,
            new_word_exposure_multiplier: 5,
            review_word_exposure_multiplier: 2,
            front_day_ratio: 0.7,
            front_word_ratio: 0.9,
            max_missing_word_ratio: 0.1,
        }
    }
}
