//! SM-2 style spaced-repetition scheduling.
//!
//! Turns a swipe event into a quality score, then a new interval, ease
//! factor, and due date, and derives the word's learning phase and mastery
//! level. Everything here is deterministic and side-effect free except
//! [`record_swipe`], which mutates the one record it is given.
//!
//! `now` is always an explicit parameter so the scheduler stays
//! unit-testable without wall-clock mocking.

use chrono::{DateTime, Duration, Utc};

use crate::config::ExposureConfig;
use crate::exposure::ExposureStrategy;
use crate::types::{
    LearningPhase, MasteryLevel, ReviewRecord, SwipeDirection, SwipeEvent, MAX_EASE_FACTOR,
    MIN_EASE_FACTOR,
};

/// Quality scores below this count as a lapse and reset the interval
pub const LAPSE_QUALITY_THRESHOLD: u8 = 3;

/// Map a swipe to an SM-2 quality score in 0..=5.
///
/// A fast right swipe signals effortless recall; a slow right swipe is a
/// hesitant pass. Left swipes score 0 or 1 depending on how quickly the
/// learner gave up.
pub fn quality(direction: SwipeDirection, dwell_seconds: f64) -> u8 {
    match direction {
        SwipeDirection::Known => {
            if dwell_seconds < 1.0 {
                5
            } else if dwell_seconds < 2.0 {
                4
            } else if dwell_seconds < 3.0 {
                3
            } else {
                2
            }
        }
        SwipeDirection::Unknown => {
            if dwell_seconds < 2.0 {
                1
            } else {
                0
            }
        }
    }
}

/// Result of one scheduling step
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOutcome {
    pub interval_days: u32,
    pub ease_factor: f64,
    pub due_at: DateTime<Utc>,
}

/// Compute the next interval, ease factor, and due date.
///
/// Any quality below 3 is a lapse: the interval resets to one day no matter
/// how long it had grown. A first successful review graduates from interval
/// 0 to 1; after that the interval multiplies by the (adjusted) ease factor.
pub fn next_review(
    current_interval: u32,
    ease_factor: f64,
    quality: u8,
    last_reviewed_at: DateTime<Utc>,
) -> ScheduleOutcome {
    let delta = match quality {
        0 => -0.20,
        1 => -0.15,
        2 => -0.10,
        3 => 0.0,
        4 => 0.05,
        _ => 0.10,
    };
    let new_ease = (ease_factor + delta).clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR);

    let new_interval = if quality < LAPSE_QUALITY_THRESHOLD {
        1
    } else if current_interval == 0 {
        1
    } else {
        (current_interval as f64 * new_ease).ceil() as u32
    };

    ScheduleOutcome {
        interval_days: new_interval,
        ease_factor: new_ease,
        due_at: last_reviewed_at + Duration::days(new_interval as i64),
    }
}

/// Position of a word in its learning lifecycle
pub fn classify_phase(review_count: u32, interval_days: u32) -> LearningPhase {
    if review_count == 0 {
        LearningPhase::Initial
    } else if review_count < 3 || interval_days < 7 {
        LearningPhase::Reinforcement
    } else if interval_days < 30 {
        LearningPhase::Consolidation
    } else {
        LearningPhase::Maintenance
    }
}

/// Tiered mastery classification, strongest tier checked first.
/// Mastered demands a clean history: five straight correct answers, a
/// month-long interval, and zero lapses ever.
pub fn classify_mastery(
    review_count: u32,
    interval_days: u32,
    consecutive_correct: u32,
    lapses: u32,
) -> MasteryLevel {
    if consecutive_correct >= 5 && interval_days >= 30 && lapses == 0 {
        MasteryLevel::Mastered
    } else if consecutive_correct >= 3 && interval_days >= 14 {
        MasteryLevel::Advanced
    } else if review_count >= 2 {
        MasteryLevel::Intermediate
    } else {
        MasteryLevel::Beginner
    }
}

/// Apply one swipe event to a record. This is the system's only mutating
/// operation: counters, dwell history, scheduling state, classification,
/// and the exposure target are all updated in one step.
///
/// The review count increments on every non-initial call, i.e. whenever the
/// record already had at least one exposure before this event.
pub fn record_swipe(
    record: &mut ReviewRecord,
    event: &SwipeEvent,
    now: DateTime<Utc>,
    strategy: &ExposureStrategy,
    config: &ExposureConfig,
) {
    let dwell = event.dwell_seconds.max(0.0);
    let is_initial = record.total_exposures == 0;

    record.total_exposures += 1;
    record.dwell_history.push(dwell);

    match event.direction {
        SwipeDirection::Known => {
            record.right_count += 1;
            record.consecutive_correct += 1;
            record.consecutive_incorrect = 0;
        }
        SwipeDirection::Unknown => {
            record.left_count += 1;
            record.consecutive_incorrect += 1;
            record.consecutive_correct = 0;
            record.lapse_count += 1;
        }
    }

    if record.first_learned_at.is_none() {
        record.first_learned_at = Some(now);
    }
    if !is_initial {
        record.review_count += 1;
    }

    let q = quality(event.direction, dwell);
    let anchor = record.last_reviewed_at.unwrap_or(now);
    let outcome = next_review(record.interval_days, record.ease_factor, q, anchor);

    record.interval_days = outcome.interval_days;
    record.ease_factor = outcome.ease_factor;
    record.next_due_at = Some(outcome.due_at);
    record.last_reviewed_at = Some(now);

    record.phase = classify_phase(record.review_count, record.interval_days);
    record.mastery = classify_mastery(
        record.review_count,
        record.interval_days,
        record.consecutive_correct,
        record.lapse_count,
    );

    record.target_exposures = strategy.target_exposures(record, config);
    record.sync_remaining();
}

/// Calendar-day due check: two reviews on the same day both count as
/// "today", regardless of time of day. A record with no due date is
/// always due.
pub fn is_due(record: &ReviewRecord, now: DateTime<Utc>) -> bool {
    match record.next_due_at {
        None => true,
        Some(due) => now.date_naive() >= due.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
    }

    #[test]
    fn quality_table_known() {
        assert_eq!(quality(SwipeDirection::Known, 0.5), 5);
        assert_eq!(quality(SwipeDirection::Known, 1.5), 4);
        assert_eq!(quality(SwipeDirection::Known, 2.5), 3);
        assert_eq!(quality(SwipeDirection::Known, 3.0), 2);
        assert_eq!(quality(SwipeDirection::Known, 40.0), 2);
    }

    #[test]
    fn quality_table_unknown() {
        assert_eq!(quality(SwipeDirection::Unknown, 0.5), 1);
        assert_eq!(quality(SwipeDirection::Unknown, 1.999), 1);
        assert_eq!(quality(SwipeDirection::Unknown, 2.0), 0);
        assert_eq!(quality(SwipeDirection::Unknown, 20.0), 0);
    }

    #[test]
    fn lapse_resets_interval_regardless_of_history() {
        let outcome = next_review(40, 2.5, 1, at(2026, 3, 1));
        assert_eq!(outcome.interval_days, 1);
        assert_eq!(outcome.due_at, at(2026, 3, 1) + Duration::days(1));
    }

    #[test]
    fn first_success_graduates_to_one_day() {
        let outcome = next_review(0, 2.5, 5, at(2026, 3, 1));
        assert_eq!(outcome.interval_days, 1);
    }

    #[test]
    fn interval_multiplies_by_ease_on_success() {
        // ease 2.5 + 0.10 clamps at 2.5, ceil(10 * 2.5) = 25
        let outcome = next_review(10, 2.5, 5, at(2026, 3, 1));
        assert_eq!(outcome.interval_days, 25);
        assert_eq!(outcome.ease_factor, 2.5);
    }

    #[test]
    fn successive_successes_never_shrink_interval() {
        let mut interval = 1;
        let mut ease = 2.5;
        let mut anchor = at(2026, 1, 1);
        let mut previous = 0;
        for _ in 0..8 {
            let outcome = next_review(interval, ease, 5, anchor);
            assert!(outcome.interval_days >= previous);
            previous = outcome.interval_days;
            interval = outcome.interval_days;
            ease = outcome.ease_factor;
            anchor = outcome.due_at;
        }
    }

    #[test]
    fn phase_tiers() {
        assert_eq!(classify_phase(0, 0), LearningPhase::Initial);
        assert_eq!(classify_phase(1, 40), LearningPhase::Reinforcement);
        assert_eq!(classify_phase(5, 3), LearningPhase::Reinforcement);
        assert_eq!(classify_phase(4, 15), LearningPhase::Consolidation);
        assert_eq!(classify_phase(8, 30), LearningPhase::Maintenance);
    }

    #[test]
    fn mastery_tiers() {
        assert_eq!(classify_mastery(10, 35, 6, 0), MasteryLevel::Mastered);
        // A single lapse ever blocks mastered
        assert_eq!(classify_mastery(10, 35, 6, 1), MasteryLevel::Advanced);
        assert_eq!(classify_mastery(5, 14, 3, 2), MasteryLevel::Advanced);
        assert_eq!(classify_mastery(2, 3, 1, 1), MasteryLevel::Intermediate);
        assert_eq!(classify_mastery(1, 1, 1, 0), MasteryLevel::Beginner);
    }

    #[test]
    fn record_swipe_counters_are_monotonic() {
        let strategy = ExposureStrategy::DwellAdaptive;
        let config = ExposureConfig::default();
        let mut record = ReviewRecord::new(1, 5);
        let now = at(2026, 3, 1);

        record_swipe(
            &mut record,
            &SwipeEvent::new(1, SwipeDirection::Known, 1.2),
            now,
            &strategy,
            &config,
        );
        assert_eq!(record.total_exposures, 1);
        assert_eq!(record.right_count, 1);
        assert_eq!(record.review_count, 0, "first exposure is not a review");
        assert_eq!(record.first_learned_at, Some(now));

        record_swipe(
            &mut record,
            &SwipeEvent::new(1, SwipeDirection::Unknown, 6.0),
            now + Duration::days(1),
            &strategy,
            &config,
        );
        assert_eq!(record.total_exposures, 2);
        assert_eq!(record.left_count, 1);
        assert_eq!(record.review_count, 1);
        assert_eq!(record.lapse_count, 1);
        assert_eq!(record.consecutive_correct, 0);
        assert_eq!(record.consecutive_incorrect, 1);
        // Lapse forces the one-day reset
        assert_eq!(record.interval_days, 1);
        // first_learned_at is set once and never moves
        assert_eq!(record.first_learned_at, Some(now));
    }

    #[test]
    fn record_swipe_keeps_remaining_in_sync() {
        let strategy = ExposureStrategy::FixedCount(4);
        let config = ExposureConfig::default();
        let mut record = ReviewRecord::new(9, 4);
        let now = at(2026, 3, 1);

        for i in 0..6 {
            record_swipe(
                &mut record,
                &SwipeEvent::new(9, SwipeDirection::Known, 0.8),
                now + Duration::days(i),
                &strategy,
                &config,
            );
        }
        assert_eq!(record.total_exposures, 6);
        // Target already exceeded: remaining floors at zero
        assert_eq!(record.remaining_exposures, 0);
    }

    #[test]
    fn is_due_uses_calendar_days() {
        let mut record = ReviewRecord::new(1, 5);
        assert!(is_due(&record, at(2026, 3, 1)), "no due date means due");

        record.next_due_at = Some(Utc.with_ymd_and_hms(2026, 3, 5, 23, 0, 0).unwrap());
        // Earlier hour, same calendar day: still due
        assert!(is_due(&record, Utc.with_ymd_and_hms(2026, 3, 5, 1, 0, 0).unwrap()));
        assert!(!is_due(&record, at(2026, 3, 4)));
        assert!(is_due(&record, at(2026, 3, 6)));
    }

    proptest! {
        // Ease factor stays inside [1.3, 2.5] after any review sequence
        #[test]
        fn ease_factor_stays_bounded(qualities in prop::collection::vec(0u8..=5, 1..50)) {
            let mut interval = 0;
            let mut ease = 2.5;
            let anchor = at(2026, 1, 1);
            for q in qualities {
                let outcome = next_review(interval, ease, q, anchor);
                prop_assert!(outcome.ease_factor >= MIN_EASE_FACTOR);
                prop_assert!(outcome.ease_factor <= MAX_EASE_FACTOR);
                interval = outcome.interval_days;
                ease = outcome.ease_factor;
            }
        }

        // Any failing quality resets the interval to exactly one day
        #[test]
        fn lapse_reset_holds_for_any_interval(interval in 0u32..10_000, q in 0u8..3) {
            let outcome = next_review(interval, 2.0, q, at(2026, 1, 1));
            prop_assert_eq!(outcome.interval_days, 1);
        }
    }
}
