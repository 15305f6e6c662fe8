//! Error types.
//!
//! The core algorithms are total; the one real failure class is data
//! completeness at the id-to-text resolution boundary.

use thiserror::Error;

use crate::types::WordId;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Too many requested word ids could not be resolved to word text.
    /// Below the configured threshold the planner degrades gracefully and
    /// returns the resolvable subset instead.
    #[error("missing word data: {missing} of {requested} ids unresolved")]
    MissingWordData {
        missing_ids: Vec<WordId>,
        missing: usize,
        requested: usize,
    },
}
