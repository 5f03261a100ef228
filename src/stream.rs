//! # Ranked Term Stream Module
//!
//! ## Purpose
//! Presents the term dictionary of a single field as a weighted term
//! sequence suitable for feeding the completion automaton builder, computing
//! each term's ranking weight and aggregate length statistics during the
//! single forward pass the builder performs.
//!
//! ## Input/Output Specification
//! - **Input**: Forward-only term cursor, base scorer, popularity counter
//! - **Output**: (term, weight) sequence with payload/context pass-through
//! - **Ranking**: `base_score + search_count * multiplier`
//!
//! ## Key Features
//! - Silently skips terms too long for the automaton's on-disk encoding
//! - Accumulates total term length for average-length statistics
//! - Saturating weight arithmetic; popularity can never wrap the score

use crate::dictionary::TermCursor;
use crate::errors::Result;
use crate::popularity::PopularityCounter;
use crate::score::BaseScorer;
use crate::wfst::WeightedTermSource;
use std::collections::BTreeSet;

/// Longest term, in bytes, the completion structure's on-disk length
/// encoding can represent. Longer terms are skipped rather than failing
/// the whole build.
pub const MAX_TERM_BYTES: usize = 32_765;

/// Weight reported before the first term has been produced and after the
/// stream is exhausted.
pub const DEFAULT_WEIGHT: u64 = 0;

/// Weighted view over one field's sorted term enumeration.
pub struct RankedTermStream<'a> {
    cursor: Box<dyn TermCursor + 'a>,
    field: &'a str,
    scorer: &'a dyn BaseScorer,
    popularity: Box<dyn PopularityCounter + 'a>,
    multiplier: u64,
    current: Option<Vec<u8>>,
    term_length_accumulator: u64,
}

impl<'a> RankedTermStream<'a> {
    pub fn new(
        cursor: Box<dyn TermCursor + 'a>,
        field: &'a str,
        scorer: &'a dyn BaseScorer,
        popularity: Box<dyn PopularityCounter + 'a>,
        multiplier: u64,
    ) -> Self {
        Self {
            cursor,
            field,
            scorer,
            popularity,
            multiplier,
            current: None,
            term_length_accumulator: 0,
        }
    }

    /// Total byte length of every term produced so far. Skipped terms are
    /// excluded. Read after the stream is exhausted to compute the field's
    /// average term length.
    pub fn term_length_accumulator(&self) -> u64 {
        self.term_length_accumulator
    }

    /// Payload bytes of the current term, delegated to the wrapped cursor.
    pub fn payload(&self) -> Option<&[u8]> {
        self.cursor.payload()
    }

    /// Context byte-strings of the current term, delegated to the wrapped
    /// cursor.
    pub fn contexts(&self) -> Option<&BTreeSet<Vec<u8>>> {
        self.cursor.contexts()
    }
}

impl WeightedTermSource for RankedTermStream<'_> {
    fn advance(&mut self) -> Result<bool> {
        let mut next = self.cursor.next()?;

        // Skip terms the automaton's length encoding cannot represent.
        while let Some(term) = &next {
            if term.len() <= MAX_TERM_BYTES {
                break;
            }
            tracing::debug!(
                "Skipping oversized term of {} bytes in field '{}'",
                term.len(),
                self.field
            );
            next = self.cursor.next()?;
        }

        if let Some(term) = &next {
            self.term_length_accumulator += term.len() as u64;
        }

        self.current = next;
        Ok(self.current.is_some())
    }

    fn current(&self) -> Option<&[u8]> {
        self.current.as_deref()
    }

    fn weight(&self) -> u64 {
        match &self.current {
            Some(term) => {
                let searched = self.popularity.get(term);
                self.scorer
                    .score(self.field, term)
                    .saturating_add(searched.saturating_mul(self.multiplier))
            }
            None => DEFAULT_WEIGHT,
        }
    }
}
