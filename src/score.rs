//! # Base Score Module
//!
//! ## Purpose
//! Interface to the externally-supplied relevance scoring function: a
//! deterministic score per (field, term) derived from index-wide term
//! statistics, independent of search history.

/// Base relevance score for a term, derived purely from index statistics
/// (e.g. document frequency). Treated as a pure function for the duration
/// of a build pass.
pub trait BaseScorer: Send + Sync {
    fn score(&self, field: &str, term: &[u8]) -> u64;
}

impl<F> BaseScorer for F
where
    F: Fn(&str, &[u8]) -> u64 + Send + Sync,
{
    fn score(&self, field: &str, term: &[u8]) -> u64 {
        self(field, term)
    }
}

/// Scorer assigning the same score to every term, leaving ranking entirely
/// to the popularity signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformScorer(pub u64);

impl BaseScorer for UniformScorer {
    fn score(&self, _field: &str, _term: &[u8]) -> u64 {
        self.0
    }
}
