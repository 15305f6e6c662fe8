//! Exposure planning.
//!
//! Decides how many total times a word should be shown and whether its
//! exposure run can stop early. The target is recomputed after every swipe
//! as dwell and swipe evidence accumulates, so it tightens toward reality
//! instead of sticking to the first guess.

use serde::{Deserialize, Serialize};

use crate::config::ExposureConfig;
use crate::types::ReviewRecord;

/// Scale applied to the dwell-adaptive target in the first 30% of a plan
const EARLY_PLAN_SCALE: f64 = 1.2;
/// Scale in the middle 40% of a plan
const MID_PLAN_SCALE: f64 = 1.0;
/// Scale in the final 30% of a plan
const LATE_PLAN_SCALE: f64 = 0.8;
/// Plan-progress fraction below which a day counts as "early"
const EARLY_PLAN_FRACTION: f64 = 0.3;
/// Plan-progress fraction below which a day counts as "middle"
const MID_PLAN_FRACTION: f64 = 0.7;

/// Exposure policy. One variant per policy; each is a pure function over
/// `(record, config)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExposureStrategy {
    /// Target follows the dwell-band table, adjusted by swipe dominance
    DwellAdaptive,
    /// Constant target regardless of evidence (still clamped)
    FixedCount(u32),
    /// Dwell-adaptive target scaled by how far into the plan we are:
    /// heavier early, lighter late
    DayProgressAdaptive { day: u32, total_days: u32 },
}

impl ExposureStrategy {
    /// Pick a strategy from the learner's goal parameters. A fixed-length
    /// plan gets the day-progress policy; open-ended study gets plain
    /// dwell adaptation.
    pub fn for_goal(plan_length_days: Option<u32>, current_day: u32) -> Self {
        match plan_length_days {
            Some(total_days) if total_days > 0 => ExposureStrategy::DayProgressAdaptive {
                day: current_day.max(1),
                total_days,
            },
            _ => ExposureStrategy::DwellAdaptive,
        }
    }

    /// Total exposures this word should receive, clamped to
    /// `[min_exposures, max_exposures]`.
    pub fn target_exposures(&self, record: &ReviewRecord, config: &ExposureConfig) -> u32 {
        let target = match self {
            ExposureStrategy::DwellAdaptive => adaptive_target(record, config),
            ExposureStrategy::FixedCount(count) => *count as i64,
            ExposureStrategy::DayProgressAdaptive { day, total_days } => {
                let base = adaptive_target(record, config);
                let scale = plan_progress_scale(*day, *total_days);
                (base as f64 * scale).round() as i64
            }
        };
        target.clamp(config.min_exposures as i64, config.max_exposures as i64) as u32
    }

    /// Whether the word should keep being shown. False once the quota is
    /// exhausted, and false under early mastery: a word swiped right three
    /// times with a very-familiar dwell profile is clearly known, so it is
    /// not forced through the rest of its quota.
    pub fn should_continue_exposure(&self, record: &ReviewRecord, config: &ExposureConfig) -> bool {
        if record.remaining_exposures == 0 {
            return false;
        }
        if record.right_count >= config.early_mastery_right_count
            && record.average_dwell() < config.thresholds.very_familiar
        {
            return false;
        }
        true
    }
}

/// Dwell-band base target plus swipe-dominance adjustment, before clamping.
fn adaptive_target(record: &ReviewRecord, config: &ExposureConfig) -> i64 {
    let avg = record.average_dwell();
    let base = if avg < config.thresholds.very_familiar {
        config.very_familiar_exposures
    } else if avg < config.thresholds.familiar {
        config.familiar_exposures
    } else if avg < config.thresholds.unfamiliar {
        config.unfamiliar_exposures
    } else {
        config.very_unfamiliar_exposures
    } as i64;

    let dominance = record.right_count as i64 - record.left_count as i64;
    let adjustment = if dominance > 0 {
        dominance * config.right_bonus as i64
    } else if dominance < 0 {
        -dominance * config.left_penalty as i64
    } else {
        0
    };

    base + adjustment
}

/// Exposure scale for a 1-based day within a plan of `total_days`.
fn plan_progress_scale(day: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        return MID_PLAN_SCALE;
    }
    let progress = day as f64 / total_days as f64;
    if progress <= EARLY_PLAN_FRACTION {
        EARLY_PLAN_SCALE
    } else if progress <= MID_PLAN_FRACTION {
        MID_PLAN_SCALE
    } else {
        LATE_PLAN_SCALE
    }
}
