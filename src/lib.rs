//! # WFST Suggester
//!
//! ## Overview
//! This library implements a per-field, per-project autocompletion engine:
//! for a set of indexed text fields it builds and maintains a compact
//! weighted completion automaton that, given a prefix, returns the
//! highest-ranked matching terms. Ranking combines a static relevance score
//! derived from term statistics with a popularity boost from historical
//! search activity.
//!
//! ## Architecture
//! The crate is composed of several key modules:
//! - `dictionary`: interfaces to the externally-owned term dictionary
//! - `popularity`: interfaces to the search-popularity subsystem
//! - `score`: interface to the externally-supplied base relevance score
//! - `stream`: weighted view over one field's sorted term enumeration
//! - `wfst`: the weighted completion automaton (build, persist, query)
//! - `store`: per-project orchestration, persistence, and lookup serving
//! - `config`: configuration management and settings
//! - `errors`: centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Sorted term enumerations per field, base scores, search
//!   counts
//! - **Output**: Ranked prefix completions, persisted per-field automata,
//!   average term length statistics
//! - **Performance**: Lookup cost proportional to prefix length plus result
//!   size; structures load from disk instead of rebuilding
//!
//! ## Usage
//! ```rust,no_run
//! use wfst_suggester::{MemoryTermDictionary, NoPopularity, ProjectSuggester, UniformScorer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut dictionary = MemoryTermDictionary::new();
//!     dictionary.insert_all("full", ["carbon", "carburetor", "cargo"]);
//!
//!     let mut suggester = ProjectSuggester::new(
//!         dictionary,
//!         "./data/suggester/project",
//!         Box::new(NoPopularity),
//!         Box::new(UniformScorer(1)),
//!     )?;
//!     suggester.set_fields(["full"]);
//!     suggester.init(false)?;
//!
//!     for completion in suggester.suggest("full", "car") {
//!         println!("{} ({})", completion.term, completion.weight);
//!     }
//!     suggester.close()?;
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod popularity;
pub mod score;
pub mod store;
pub mod stream;
pub mod wfst;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::SuggesterConfig;
pub use dictionary::{MemoryTermDictionary, TermCursor, TermDictReader, TermDictionary};
pub use errors::{Result, SuggestError};
pub use popularity::{MemoryPopularity, NoPopularity, PopularityCounter, PopularityProvider};
pub use score::{BaseScorer, UniformScorer};
pub use store::{FieldStatus, ProjectSuggester};
pub use stream::RankedTermStream;
pub use wfst::{Completion, CompletionLookup, ScratchSpace, WeightedTermSource};
