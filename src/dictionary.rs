//! # Term Dictionary Module
//!
//! ## Purpose
//! Interfaces to the externally-owned term dictionary: a read-only, sorted
//! enumeration of the distinct terms of each indexed field.
//!
//! ## Input/Output Specification
//! - **Input**: Field names
//! - **Output**: Forward-only cursors over sorted distinct term bytes, with
//!   optional payload and context byte-strings per term
//!
//! ## Key Features
//! - Scoped reader acquisition: one handle per build/load pass, released
//!   when the pass ends
//! - Forward-only cursors; no backward seeks
//! - In-memory implementation for tests and embedding callers

use crate::errors::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Externally-owned term dictionary for one project/index.
///
/// A reader is opened once per build/load pass and dropped when the pass
/// completes, bounding the number of concurrently open handles to one per
/// in-flight pass.
pub trait TermDictionary: Send + Sync {
    /// Open a reader over the dictionary.
    fn open(&self) -> Result<Box<dyn TermDictReader + '_>>;
}

/// An open dictionary handle, valid for the duration of one pass.
pub trait TermDictReader {
    /// Enumerate the distinct terms of `field` in sorted order.
    ///
    /// A field with no terms yields an empty cursor, not an error.
    fn terms(&self, field: &str) -> Result<Box<dyn TermCursor + '_>>;
}

/// Forward-only cursor over the sorted terms of a single field.
pub trait TermCursor {
    /// Advance to the next term, returning its bytes, or `None` at the end.
    fn next(&mut self) -> Result<Option<Vec<u8>>>;

    /// Payload bytes attached to the current term, if any.
    fn payload(&self) -> Option<&[u8]> {
        None
    }

    /// Context byte-strings attached to the current term, if any.
    fn contexts(&self) -> Option<&BTreeSet<Vec<u8>>> {
        None
    }
}

/// In-memory term dictionary backed by sorted per-field term sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryTermDictionary {
    fields: BTreeMap<String, BTreeSet<Vec<u8>>>,
}

impl MemoryTermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single term to a field. Duplicates are ignored.
    pub fn insert(&mut self, field: &str, term: impl Into<Vec<u8>>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .insert(term.into());
    }

    /// Add every term of an iterator to a field.
    pub fn insert_all<I, T>(&mut self, field: &str, terms: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        for term in terms {
            self.insert(field, term);
        }
    }

    /// Number of distinct terms recorded for a field.
    pub fn field_len(&self, field: &str) -> usize {
        self.fields.get(field).map_or(0, BTreeSet::len)
    }
}

impl TermDictionary for MemoryTermDictionary {
    fn open(&self) -> Result<Box<dyn TermDictReader + '_>> {
        Ok(Box::new(MemoryReader { dict: self }))
    }
}

struct MemoryReader<'a> {
    dict: &'a MemoryTermDictionary,
}

impl TermDictReader for MemoryReader<'_> {
    fn terms(&self, field: &str) -> Result<Box<dyn TermCursor + '_>> {
        let iter: Box<dyn Iterator<Item = &[u8]> + '_> = match self.dict.fields.get(field) {
            Some(terms) => Box::new(terms.iter().map(|t| t.as_slice())),
            None => Box::new(std::iter::empty()),
        };
        Ok(Box::new(MemoryCursor { iter }))
    }
}

struct MemoryCursor<'a> {
    iter: Box<dyn Iterator<Item = &'a [u8]> + 'a>,
}

impl TermCursor for MemoryCursor<'_> {
    fn next(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.iter.next().map(<[u8]>::to_vec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(cursor: &mut dyn TermCursor) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(term) = cursor.next().unwrap() {
            out.push(term);
        }
        out
    }

    #[test]
    fn test_sorted_distinct_enumeration() {
        let mut dict = MemoryTermDictionary::new();
        dict.insert_all("full", ["car", "cat", "aardvark", "cat"]);

        let reader = dict.open().unwrap();
        let mut cursor = reader.terms("full").unwrap();
        let terms = drain(cursor.as_mut());

        assert_eq!(
            terms,
            vec![b"aardvark".to_vec(), b"car".to_vec(), b"cat".to_vec()]
        );
        assert_eq!(dict.field_len("full"), 3);
    }

    #[test]
    fn test_unknown_field_is_empty() {
        let dict = MemoryTermDictionary::new();
        let reader = dict.open().unwrap();
        let mut cursor = reader.terms("missing").unwrap();
        assert!(cursor.next().unwrap().is_none());
        assert_eq!(dict.field_len("missing"), 0);
    }

    #[test]
    fn test_default_capabilities_absent() {
        let mut dict = MemoryTermDictionary::new();
        dict.insert("full", "cat");
        let reader = dict.open().unwrap();
        let mut cursor = reader.terms("full").unwrap();
        cursor.next().unwrap();
        assert!(cursor.payload().is_none());
        assert!(cursor.contexts().is_none());
    }
}
