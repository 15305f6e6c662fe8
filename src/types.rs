//! Common Types and Constants
//!
//! Shared data structures used across all algorithm modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Lower bound of the SM-2 ease factor
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Upper bound of the SM-2 ease factor
pub const MAX_EASE_FACTOR: f64 = 2.5;

/// Ease factor assigned to a word that has never been reviewed
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

// ==================== Identifiers & Events ====================

/// Stable word identifier, unique per learner/word pair
pub type WordId = u64;

/// Swipe direction reported by the interaction layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDirection {
    /// Right swipe: the learner claims to know the word
    Known,
    /// Left swipe: the learner does not know the word
    Unknown,
}

/// One raw interaction event: a word was shown and swiped away
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeEvent {
    pub word_id: WordId,
    pub direction: SwipeDirection,
    /// Seconds the card was on screen before the swipe
    pub dwell_seconds: f64,
}

impl SwipeEvent {
    pub fn new(word_id: WordId, direction: SwipeDirection, dwell_seconds: f64) -> Self {
        Self {
            word_id,
            direction,
            // Negative dwell is a contract violation upstream; clamp here
            dwell_seconds: dwell_seconds.max(0.0),
        }
    }
}

// ==================== Classification ====================

/// Coarse position of a word in its learning lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LearningPhase {
    Initial,
    Reinforcement,
    Consolidation,
    Maintenance,
}

/// Four-stage summary of retention strength, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MasteryLevel {
    Beginner,
    Intermediate,
    Advanced,
    Mastered,
}

impl MasteryLevel {
    /// Progress weight used by the familiarity score
    pub fn progress(&self) -> f64 {
        match self {
            MasteryLevel::Beginner => 0.25,
            MasteryLevel::Intermediate => 0.5,
            MasteryLevel::Advanced => 0.75,
            MasteryLevel::Mastered => 1.0,
        }
    }
}

// ==================== Review Record ====================

/// Per-word learning state. Owned by the caller; every algorithm here
/// operates on borrowed records and returns updated values for the
/// storage layer to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub word_id: WordId,

    // Exposure counters
    pub total_exposures: u32,
    pub remaining_exposures: u32,
    /// Mutable target; recomputed by the exposure strategy as evidence accumulates
    pub target_exposures: u32,

    // Swipe counters
    pub right_count: u32,
    pub left_count: u32,

    /// Per-exposure dwell times in seconds, oldest first
    pub dwell_history: Vec<f64>,

    // Scheduling state
    pub ease_factor: f64,
    pub interval_days: u32,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_due_at: Option<DateTime<Utc>>,
    pub review_count: u32,
    /// Cumulative count of "unknown" swipes
    pub lapse_count: u32,
    pub consecutive_correct: u32,
    pub consecutive_incorrect: u32,

    // Classification state
    pub phase: LearningPhase,
    pub mastery: MasteryLevel,

    /// Set once, on the first exposure
    pub first_learned_at: Option<DateTime<Utc>>,
}

impl ReviewRecord {
    /// Create a fresh record. `target_exposures` is seeded by the exposure
    /// strategy at word-introduction time.
    pub fn new(word_id: WordId, target_exposures: u32) -> Self {
        Self {
            word_id,
            total_exposures: 0,
            remaining_exposures: target_exposures,
            target_exposures,
            right_count: 0,
            left_count: 0,
            dwell_history: Vec::new(),
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0,
            last_reviewed_at: None,
            next_due_at: None,
            review_count: 0,
            lapse_count: 0,
            consecutive_correct: 0,
            consecutive_incorrect: 0,
            phase: LearningPhase::Initial,
            mastery: MasteryLevel::Beginner,
            first_learned_at: None,
        }
    }

    /// Mean of the dwell history, 0.0 when no exposures have been recorded
    pub fn average_dwell(&self) -> f64 {
        if self.dwell_history.is_empty() {
            return 0.0;
        }
        self.dwell_history.iter().sum::<f64>() / self.dwell_history.len() as f64
    }

    /// Re-derive `remaining_exposures` from the current counters.
    /// Exposures never go negative: a target already met leaves zero.
    pub fn sync_remaining(&mut self) {
        self.remaining_exposures = self.target_exposures.saturating_sub(self.total_exposures);
    }
}

// ==================== Daily Task ====================

/// Completion state of a day's task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// One day's workload: which words to introduce, which to review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTask {
    /// 1-based position within the plan
    pub day_index: u32,
    pub new_word_ids: Vec<WordId>,
    pub review_word_ids: Vec<WordId>,
    pub total_exposures_planned: u32,
    pub completed_exposures: u32,
    pub status: TaskStatus,
}

// ==================== Study Plan ====================

/// New-word allocation for a single day of a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day number
    pub day_index: u32,
    pub new_word_count: u32,
    /// Whether this day falls in the review-heavy tail of the plan
    pub review_day: bool,
}

/// Full multi-day distribution of a fixed vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub total_words: u32,
    pub total_days: u32,
    pub days: Vec<DayPlan>,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_clean() {
        let record = ReviewRecord::new(7, 5);
        assert_eq!(record.word_id, 7);
        assert_eq!(record.target_exposures, 5);
        assert_eq!(record.remaining_exposures, 5);
        assert_eq!(record.ease_factor, DEFAULT_EASE_FACTOR);
        assert_eq!(record.phase, LearningPhase::Initial);
        assert_eq!(record.mastery, MasteryLevel::Beginner);
        assert!(record.first_learned_at.is_none());
    }

    #[test]
    fn average_dwell_empty_history_is_zero() {
        let record = ReviewRecord::new(1, 3);
        assert_eq!(record.average_dwell(), 0.0);
    }

    #[test]
    fn average_dwell_is_mean() {
        let mut record = ReviewRecord::new(1, 3);
        record.dwell_history = vec![2.0, 4.0, 6.0];
        assert_eq!(record.average_dwell(), 4.0);
    }

    #[test]
    fn sync_remaining_never_negative() {
        let mut record = ReviewRecord::new(1, 3);
        record.total_exposures = 10;
        record.sync_remaining();
        assert_eq!(record.remaining_exposures, 0);
    }

    #[test]
    fn mastery_levels_are_ordered() {
        assert!(MasteryLevel::Beginner < MasteryLevel::Intermediate);
        assert!(MasteryLevel::Intermediate < MasteryLevel::Advanced);
        assert!(MasteryLevel::Advanced < MasteryLevel::Mastered);
    }

    #[test]
    fn swipe_event_clamps_negative_dwell() {
        let event = SwipeEvent::new(1, SwipeDirection::Known, -2.5);
        assert_eq!(event.dwell_seconds, 0.0);
    }

    #[test]
    fn record_serde_roundtrip() {
        let mut record = ReviewRecord::new(42, 7);
        record.dwell_history = vec![1.5, 3.0];
        record.next_due_at = Some(Utc::now());
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: ReviewRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.word_id, 42);
        assert_eq!(decoded.dwell_history, record.dwell_history);
        assert_eq!(decoded.next_due_at, record.next_due_at);
    }
}
