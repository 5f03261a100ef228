//! # Weighted Completion Structure Module
//!
//! ## Purpose
//! The weighted automaton behind every suggestion: maps term bytes to ranking
//! weights and answers top-K prefix queries. Wraps the `fst` crate behind
//! build, persist, load, and query primitives.
//!
//! ## Input/Output Specification
//! - **Input**: Sorted weighted term stream (build), prefix queries (lookup)
//! - **Output**: Ranked completions, native binary serialization on disk
//! - **Performance**: Query cost proportional to prefix length plus result
//!   size, never the full vocabulary
//!
//! ## Key Features
//! - Builds through a scratch file, keeping peak memory bounded during
//!   construction
//! - Atomic persistence (temp file + rename)
//! - Top-K selection with a bounded min-heap
//! - Deterministic ordering: weight descending, term bytes ascending on ties

use crate::errors::{Result, SuggestError};
use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Map, MapBuilder, Streamer};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

/// Suffix of persisted completion structure files.
pub const WFST_FILE_SUFFIX: &str = ".wfst";

const SCRATCH_PREFIX: &str = "wfst-suggester";

/// A sequence of sorted terms with per-term weights, consumed once by
/// [`CompletionLookup::build`].
pub trait WeightedTermSource {
    /// Advance to the next term; `false` at end of stream.
    fn advance(&mut self) -> Result<bool>;

    /// Bytes of the current term, `None` before the first advance and after
    /// the end of the stream.
    fn current(&self) -> Option<&[u8]>;

    /// Ranking weight of the current term.
    fn weight(&self) -> u64;
}

/// A single ranked completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Completed term text
    pub term: String,
    /// Weight assigned at build time
    pub weight: u64,
}

/// Scratch directory used by the builder for temporary files. Owned by the
/// store and released on shutdown; dropping without [`close`](Self::close)
/// cleans up best-effort.
#[derive(Debug)]
pub struct ScratchSpace {
    dir: TempDir,
}

impl ScratchSpace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Release the scratch directory, surfacing removal errors.
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// Ranking key: higher weight ranks first, ties rank the lexicographically
/// smaller term first.
#[derive(PartialEq, Eq)]
struct RankKey {
    weight: u64,
    term: Vec<u8>,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| other.term.cmp(&self.term))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// In-memory weighted completion structure for one field.
pub struct CompletionLookup {
    map: Map<Vec<u8>>,
}

impl CompletionLookup {
    /// Build from a sorted weighted term stream.
    ///
    /// The automaton is written through a temp file inside `scratch` and then
    /// loaded back, so construction memory stays bounded by the automaton
    /// size rather than the raw vocabulary. Input must be sorted unique term
    /// bytes; out-of-order input surfaces as an automaton error.
    pub fn build<S>(source: &mut S, scratch: &ScratchSpace) -> Result<Self>
    where
        S: WeightedTermSource + ?Sized,
    {
        let file = tempfile::tempfile_in(scratch.path())?;
        let mut builder = MapBuilder::new(BufWriter::new(file))?;

        while source.advance()? {
            let weight = source.weight();
            if let Some(term) = source.current() {
                builder.insert(term, weight)?;
            }
        }

        let mut file = builder
            .into_inner()?
            .into_inner()
            .map_err(|e| e.into_error())?;
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        Ok(Self {
            map: Map::new(bytes)?,
        })
    }

    /// Persist the native serialization to `path` atomically.
    pub fn store(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(self.map.as_fst().as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Revive a persisted structure.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let map = Map::new(bytes).map_err(|e| SuggestError::StoredDataCorrupted {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Self { map })
    }

    /// Up to `limit` completions starting with `prefix`, ordered by weight
    /// descending, ties by term bytes ascending.
    pub fn lookup(&self, prefix: &str, limit: usize) -> Vec<Completion> {
        if limit == 0 {
            return Vec::new();
        }

        let mut stream = self.map.search(Str::new(prefix).starts_with()).into_stream();

        // Min-heap of the `limit` best keys seen so far; the root is the
        // lowest-ranked survivor.
        let mut heap: BinaryHeap<Reverse<RankKey>> = BinaryHeap::with_capacity(limit + 1);
        while let Some((term, weight)) = stream.next() {
            let key = RankKey {
                weight,
                term: term.to_vec(),
            };
            if heap.len() < limit {
                heap.push(Reverse(key));
            } else {
                let displaces = heap.peek().is_some_and(|Reverse(worst)| key > *worst);
                if displaces {
                    heap.pop();
                    heap.push(Reverse(key));
                }
            }
        }

        let mut ranked: Vec<RankKey> = heap.into_iter().map(|Reverse(key)| key).collect();
        ranked.sort_by(|a, b| b.cmp(a));
        ranked
            .into_iter()
            .map(|key| Completion {
                term: String::from_utf8_lossy(&key.term).into_owned(),
                weight: key.weight,
            })
            .collect()
    }

    /// Number of terms in the structure.
    pub fn count(&self) -> usize {
        self.map.len()
    }

    /// Weight of `term` if present.
    pub fn get(&self, term: &str) -> Option<u64> {
        self.map.get(term)
    }

    /// Whether `term` is present.
    pub fn contains(&self, term: &str) -> bool {
        self.map.contains_key(term)
    }
}
