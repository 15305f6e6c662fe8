//! Batch dwell-time analysis.
//!
//! Takes a full day's records and produces the descending difficulty
//! ranking the rest of the system is built on: the same ordering serves as
//! today's difficulty report, tomorrow's review-candidate list, and the
//! difficult-word seed list for passage generation.
//!
//! Ordering is deterministic: descending average dwell, ties broken by
//! ascending word id. Per-record work is data-parallel; the final sort is
//! the deterministic merge step.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::dwell::DwellBand;
use crate::types::{ReviewRecord, WordId};

/// Word ids partitioned by familiarity band, disjoint and exhaustive over
/// the analyzed set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandBuckets {
    pub very_fast: Vec<WordId>,
    pub fast: Vec<WordId>,
    pub medium: Vec<WordId>,
    pub slow: Vec<WordId>,
    pub very_slow: Vec<WordId>,
}

impl BandBuckets {
    fn push(&mut self, band: DwellBand, word_id: WordId) {
        match band {
            DwellBand::VeryFast => self.very_fast.push(word_id),
            DwellBand::Fast => self.fast.push(word_id),
            DwellBand::Medium => self.medium.push(word_id),
            DwellBand::Slow => self.slow.push(word_id),
            DwellBand::VerySlow => self.very_slow.push(word_id),
        }
    }

    pub fn total(&self) -> usize {
        self.very_fast.len()
            + self.fast.len()
            + self.medium.len()
            + self.slow.len()
            + self.very_slow.len()
    }
}

/// Immutable result of one analysis pass. Recomputed per call, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DwellTimeAnalysis {
    /// Records that survived filtering, hardest (longest dwell) first
    pub sorted_by_dwell: Vec<ReviewRecord>,
    pub buckets: BandBuckets,
    /// Count per band; all five keys always present, zero-filled
    pub distribution: BTreeMap<DwellBand, usize>,
    pub average_dwell: f64,
    pub median_dwell: f64,
    pub total_words: usize,
}

impl DwellTimeAnalysis {
    fn empty() -> Self {
        Self {
            sorted_by_dwell: Vec::new(),
            buckets: BandBuckets::default(),
            distribution: zero_distribution(),
            average_dwell: 0.0,
            median_dwell: 0.0,
            total_words: 0,
        }
    }

    /// The `count` hardest words, in difficulty order. This prefix is the
    /// sole channel through which today's difficulty feeds tomorrow's
    /// plan; the planner asks for its configured daily review count
    /// (20 by default).
    pub fn words_needing_review(&self, count: usize) -> Vec<WordId> {
        self.sorted_by_dwell
            .iter()
            .take(count)
            .map(|r| r.word_id)
            .collect()
    }

    /// Shorter difficulty prefix (typically 10) used to seed
    /// reading-passage generation
    pub fn top_difficult_words(&self, count: usize) -> Vec<WordId> {
        self.words_needing_review(count)
    }
}

fn zero_distribution() -> BTreeMap<DwellBand, usize> {
    DwellBand::ALL.iter().map(|&band| (band, 0)).collect()
}

/// Analyze a day's records. Empty input is not an error: it yields the
/// all-zero analysis.
pub fn analyze(records: &[ReviewRecord], config: &AnalyzerConfig) -> DwellTimeAnalysis {
    let mut filtered: Vec<ReviewRecord> = records
        .par_iter()
        .filter(|r| r.total_exposures >= config.minimum_exposures)
        .filter(|r| config.include_zero_dwell || r.average_dwell() > 0.0)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return DwellTimeAnalysis::empty();
    }

    filtered.sort_by(|a, b| {
        b.average_dwell()
            .total_cmp(&a.average_dwell())
            .then(a.word_id.cmp(&b.word_id))
    });

    let dwells: Vec<f64> = filtered.iter().map(|r| r.average_dwell()).collect();

    let mut buckets = BandBuckets::default();
    let mut distribution = zero_distribution();
    for (record, &dwell) in filtered.iter().zip(dwells.iter()) {
        let band = DwellBand::classify(dwell);
        buckets.push(band, record.word_id);
        *distribution.entry(band).or_insert(0) += 1;
    }

    let average = dwells.iter().sum::<f64>() / dwells.len() as f64;
    let median = median_of(&dwells);

    debug!(
        total = filtered.len(),
        average, median, "dwell analysis complete"
    );

    DwellTimeAnalysis {
        total_words: filtered.len(),
        sorted_by_dwell: filtered,
        buckets,
        distribution,
        average_dwell: average,
        median_dwell: median,
    }
}

/// Median over the dwell values, sorted independently of the record order.
/// Even count averages the two middle values.
fn median_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
