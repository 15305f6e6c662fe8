//! # wordpace-algo - Adaptive Exposure & Scheduling Engine
//!
//! Pure-Rust core for an adaptive vocabulary learner. Given a learner's
//! swipe-and-dwell interaction history, it decides how many more times each
//! word must be shown, when a word becomes due for review, which words to
//! review today, and how to front-load a fixed vocabulary across a fixed
//! number of days.
//!
//! ## Design
//!
//! - **Pure** - every algorithm is a deterministic function over value
//!   types; `now` is always an explicit parameter, and the caller owns all
//!   persistence.
//! - **Storage-agnostic** - records are plain serde values; the storage
//!   layer serializes them however it likes.
//! - **Parallel-friendly** - batch operations fan per-record work out with
//!   rayon and merge through a deterministic sort.
//!
//! ## Modules
//!
//! - [`types`] - review records, swipe events, plans, shared constants
//! - [`config`] - the full configuration surface with documented defaults
//! - [`dwell`] - dwell-time familiarity bands
//! - [`scheduler`] - SM-2 scheduling, phase and mastery classification
//! - [`exposure`] - exposure-count policies and the early-mastery cutoff
//! - [`analyzer`] - batch dwell analysis and the difficulty ranking
//! - [`selector`] - due-for-review ranking
//! - [`planner`] - multi-day front-loaded task distribution
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use wordpace_algo::{
//!     record_swipe, ExposureConfig, ExposureStrategy, ReviewRecord, SwipeDirection, SwipeEvent,
//! };
//!
//! let config = ExposureConfig::default();
//! let strategy = ExposureStrategy::DwellAdaptive;
//! let mut record = ReviewRecord::new(1, strategy.target_exposures(&ReviewRecord::new(1, 0), &config));
//!
//! let event = SwipeEvent::new(1, SwipeDirection::Known, 1.4);
//! record_swipe(&mut record, &event, Utc::now(), &strategy, &config);
//! assert_eq!(record.total_exposures, 1);
//! ```

pub mod analyzer;
pub mod config;
pub mod dwell;
pub mod error;
pub mod exposure;
pub mod planner;
pub mod scheduler;
pub mod selector;
pub mod types;

pub use analyzer::{analyze, BandBuckets, DwellTimeAnalysis};
pub use config::{AnalyzerConfig, DwellThresholds, ExposureConfig, PlannerConfig};
pub use dwell::DwellBand;
pub use error::PlanError;
pub use exposure::ExposureStrategy;
pub use planner::{difficult_word_texts, generate_plan, next_daily_task};
pub use scheduler::{
    classify_mastery, classify_phase, is_due, next_review, quality, record_swipe, ScheduleOutcome,
};
pub use selector::{due_for_review, familiarity_score};
pub use types::{
    DailyTask, DayPlan, LearningPhase, MasteryLevel, ReviewRecord, StudyPlan, SwipeDirection,
    SwipeEvent, TaskStatus, WordId,
};
