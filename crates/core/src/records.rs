//! Records module - the in-session high-score list
//!
//! Keeps the best [`RECORDS_CAPACITY`] scores in descending order. Equal
//! scores keep their arrival order. Nothing is written to disk; the list
//! lives as long as the app does.

use crate::types::RECORDS_CAPACITY;

/// Top scores, best first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Records {
    scores: Vec<u32>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list that results from adding `score`.
    ///
    /// Pure: `self` is left untouched.
    pub fn with_score(&self, score: u32) -> Records {
        let mut scores = Vec::with_capacity(self.scores.len() + 1);
        scores.extend_from_slice(&self.scores);
        scores.push(score);
        // Stable sort, so ties keep the earlier entry first.
        scores.sort_by(|a, b| b.cmp(a));
        scores.truncate(RECORDS_CAPACITY);
        Records { scores }
    }

    /// Add `score` and return its 0-based rank if it made the list.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        // Ties land behind existing equal scores.
        let rank = self.scores.iter().filter(|&&s| s >= score).count();
        *self = self.with_score(score);
        (rank < RECORDS_CAPACITY).then_some(rank)
    }

    /// Scores, best first
    pub fn entries(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<u32> for Records {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Records::new(), |records, score| records.with_score(score))
    }
}
