//! Multi-day task planning.
//!
//! Distributes a fixed vocabulary across a fixed number of days so that
//! early days carry more new material and later days shift toward review,
//! and assembles each day's task from the previous day's dwell analysis.

use tracing::{info, warn};

use crate::analyzer::DwellTimeAnalysis;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::types::{DailyTask, DayPlan, StudyPlan, TaskStatus, WordId};

/// Generate the full front-loaded plan up front.
///
/// The first `round(days × front_day_ratio)` days share
/// `round(total × front_word_ratio)` words by integer division; the
/// remaining days share the rest the same way. Whatever integer division
/// leaves over is added to the final day, so the per-day counts always sum
/// to exactly `total_words`. Zero words or zero days yields an empty plan.
pub fn generate_plan(total_words: u32, days: u32, config: &PlannerConfig) -> StudyPlan {
    if total_words == 0 || days == 0 {
        return StudyPlan {
            total_words,
            total_days: days,
            days: Vec::new(),
        };
    }

    let front_days = ((days as f64 * config.front_day_ratio).round() as u32).min(days);
    let back_days = days - front_days;
    let front_words = ((total_words as f64 * config.front_word_ratio).round() as u32)
        .min(total_words);
    let back_words = total_words - front_words;

    let per_front_day = if front_days > 0 { front_words / front_days } else { 0 };
    let per_back_day = if back_days > 0 { back_words / back_days } else { 0 };

    let mut day_plans: Vec<DayPlan> = (1..=days)
        .map(|day_index| {
            let front = day_index <= front_days;
            DayPlan {
                day_index,
                new_word_count: if front { per_front_day } else { per_back_day },
                review_day: !front,
            }
        })
        .collect();

    // Last-day remainder correction keeps the total exact
    let assigned: u32 = day_plans.iter().map(|d| d.new_word_count).sum();
    if let Some(last) = day_plans.last_mut() {
        last.new_word_count += total_words - assigned;
    }

    info!(
        total_words,
        days, front_days, front_words, "generated front-loaded study plan"
    );

    StudyPlan {
        total_words,
        total_days: days,
        days: day_plans,
    }
}

/// Build one day's task. Review words come from the previous day's
/// difficulty ranking, capped at the configured daily review count; the
/// first day of a plan has no analysis yet and therefore no reviews.
pub fn next_daily_task(
    day_index: u32,
    new_word_ids: Vec<WordId>,
    previous_analysis: Option<&DwellTimeAnalysis>,
    config: &PlannerConfig,
) -> DailyTask {
    let review_word_ids = previous_analysis
        .map(|analysis| analysis.words_needing_review(config.daily_review_count))
        .unwrap_or_default();

    let total_exposures_planned = new_word_ids.len() as u32 * config.new_word_exposure_multiplier
        + review_word_ids.len() as u32 * config.review_word_exposure_multiplier;

    info!(
        day_index,
        new = new_word_ids.len(),
        review = review_word_ids.len(),
        total_exposures_planned,
        "assembled daily task"
    );

    DailyTask {
        day_index,
        new_word_ids,
        review_word_ids,
        total_exposures_planned,
        completed_exposures: 0,
        status: TaskStatus::Pending,
    }
}

/// Resolve the hardest words of an analysis to their text, for the external
/// passage-generation collaborator. Id-to-text lookup is supplied by the
/// caller; the core does not own the catalog.
///
/// If more than `max_missing_word_ratio` of the requested ids cannot be
/// resolved the whole call fails with [`PlanError::MissingWordData`];
/// below the threshold the resolvable subset is returned.
pub fn difficult_word_texts<F>(
    analysis: &DwellTimeAnalysis,
    count: usize,
    lookup: F,
    config: &PlannerConfig,
) -> Result<Vec<String>, PlanError>
where
    F: Fn(WordId) -> Option<String>,
{
    let requested = analysis.top_difficult_words(count);
    if requested.is_empty() {
        return Ok(Vec::new());
    }

    let mut resolved = Vec::with_capacity(requested.len());
    let mut missing_ids = Vec::new();
    for word_id in &requested {
        match lookup(*word_id) {
            Some(text) => resolved.push(text),
            None => missing_ids.push(*word_id),
        }
    }

    let missing_fraction = missing_ids.len() as f64 / requested.len() as f64;
    if missing_fraction > config.max_missing_word_ratio {
        return Err(PlanError::MissingWordData {
            missing: missing_ids.len(),
            requested: requested.len(),
            missing_ids,
        });
    }

    if !missing_ids.is_empty() {
        warn!(
            missing = missing_ids.len(),
            requested = requested.len(),
            "word text lookup degraded, returning resolvable subset"
        );
    }

    Ok(resolved)
}
