//! Review selection.
//!
//! Cross-day query: out of all records, which words are due today, and in
//! what order should they be reviewed. Never-scheduled words lead the
//! queue, then the most overdue, the most lapsed, the least mastered, and
//! the least familiar.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::scheduler::is_due;
use crate::types::{ReviewRecord, WordId};

/// Weight of mastery progress in the familiarity score
const MASTERY_WEIGHT: f64 = 50.0;
/// Weight of the right-swipe ratio
const RIGHT_RATIO_WEIGHT: f64 = 30.0;
/// Weight of the dwell bonus
const DWELL_BONUS_WEIGHT: f64 = 20.0;
/// Dwell at or above this many seconds earns no bonus
const DWELL_BONUS_CEILING: f64 = 3.0;

/// Composite familiarity in 0..=100. Combines mastery progress, the share
/// of right swipes, and a bonus for short dwell times.
pub fn familiarity_score(record: &ReviewRecord) -> u32 {
    let progress = record.mastery.progress();
    let right_ratio = record.right_count as f64 / record.total_exposures.max(1) as f64;
    let dwell_bonus =
        ((DWELL_BONUS_CEILING - record.average_dwell()) / DWELL_BONUS_CEILING).max(0.0);

    (progress * MASTERY_WEIGHT + right_ratio * RIGHT_RATIO_WEIGHT + dwell_bonus * DWELL_BONUS_WEIGHT)
        .round() as u32
}

/// Ids due for review today, ranked weakest-first.
///
/// Ranking, in order: earlier due date first with never-scheduled records
/// leading (`None` sorts before any date), then higher lapse count, lower
/// mastery level, lower familiarity score, and ascending word id as the
/// final deterministic tie-break.
pub fn due_for_review(
    records: &[ReviewRecord],
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<WordId> {
    let mut due: Vec<&ReviewRecord> = records.par_iter().filter(|r| is_due(r, now)).collect();

    due.sort_by(|a, b| {
        let a_due = a.next_due_at.map(|d| d.date_naive());
        let b_due = b.next_due_at.map(|d| d.date_naive());
        a_due
            .cmp(&b_due)
            .then_with(|| b.lapse_count.cmp(&a.lapse_count))
            .then_with(|| a.mastery.cmp(&b.mastery))
            .then_with(|| familiarity_score(a).cmp(&familiarity_score(b)))
            .then_with(|| a.word_id.cmp(&b.word_id))
    });

    let ids = due.iter().map(|r| r.word_id);
    match limit {
        Some(limit) => ids.take(limit).collect(),
        None => ids.collect(),
    }
}
