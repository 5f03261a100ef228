//! # Field Completion Store Module
//!
//! ## Purpose
//! Lifecycle management of one weighted completion structure per managed
//! field of a project: build-vs-load orchestration, per-field persistence,
//! ranked prefix lookup, and term statistics.
//!
//! ## Input/Output Specification
//! - **Input**: Term dictionary handle, storage directory, popularity
//!   provider, base scorer, managed field set
//! - **Output**: Ranked completions per field, average term lengths,
//!   persisted structure files (one per field)
//!
//! ## Key Features
//! - Coarse whole-project staleness check on `init`; callers assert currency
//! - Self-healing load: a missing per-field file is rebuilt in place
//! - Partial success: one field failing to build or load does not take the
//!   remaining fields down
//! - Lookup failures degrade to empty results, never errors
//! - Explicit per-field state, observable through [`FieldStatus`]

use crate::config::SuggesterConfig;
use crate::dictionary::{TermDictReader, TermDictionary};
use crate::errors::{Result, SuggestError};
use crate::popularity::PopularityProvider;
use crate::score::BaseScorer;
use crate::stream::RankedTermStream;
use crate::utils::{sanitize_filename, Timer};
use crate::wfst::{Completion, CompletionLookup, ScratchSpace, WFST_FILE_SUFFIX};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Observable lifecycle state of one managed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Managed but not yet built or loaded
    Unbuilt,
    /// Structure in memory, serving lookups
    Ready,
    /// Most recent build or load attempt failed
    Failed,
}

enum FieldState {
    Unbuilt,
    Built(CompletionLookup),
    Failed,
}

/// Per-project suggester data: one completion structure per managed field.
///
/// `build`, `init`, and `set_fields` take `&mut self` and must be serialized
/// by the caller; `lookup` and the statistics getters take `&self` and are
/// safe to call concurrently once initialization has completed. `close`
/// consumes the store and releases its scratch space.
pub struct ProjectSuggester<D: TermDictionary> {
    dictionary: D,
    suggester_dir: PathBuf,
    popularity: Box<dyn PopularityProvider>,
    scorer: Box<dyn BaseScorer>,
    config: SuggesterConfig,
    fields: BTreeSet<String>,
    lookups: HashMap<String, FieldState>,
    average_lengths: HashMap<String, f64>,
    scratch: ScratchSpace,
}

impl<D: TermDictionary> ProjectSuggester<D> {
    /// Create a store with default configuration.
    pub fn new(
        dictionary: D,
        suggester_dir: impl Into<PathBuf>,
        popularity: Box<dyn PopularityProvider>,
        scorer: Box<dyn BaseScorer>,
    ) -> Result<Self> {
        Self::with_config(
            dictionary,
            suggester_dir,
            popularity,
            scorer,
            SuggesterConfig::default(),
        )
    }

    pub fn with_config(
        dictionary: D,
        suggester_dir: impl Into<PathBuf>,
        popularity: Box<dyn PopularityProvider>,
        scorer: Box<dyn BaseScorer>,
        config: SuggesterConfig,
    ) -> Result<Self> {
        config.validate()?;
        let suggester_dir = suggester_dir.into();
        std::fs::create_dir_all(&suggester_dir)?;
        let scratch = ScratchSpace::new()?;

        Ok(Self {
            dictionary,
            suggester_dir,
            popularity,
            scorer,
            config,
            fields: BTreeSet::new(),
            lookups: HashMap::new(),
            average_lengths: HashMap::new(),
            scratch,
        })
    }

    /// Fix the managed field set. Call once, before [`init`](Self::init);
    /// calling again replaces the set and resets all per-field state.
    pub fn set_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self.lookups = self
            .fields
            .iter()
            .map(|field| (field.clone(), FieldState::Unbuilt))
            .collect();
        self.average_lengths.clear();
    }

    /// Managed field names.
    pub fn fields(&self) -> &BTreeSet<String> {
        &self.fields
    }

    /// Load stored structures if present and asserted current by the caller,
    /// otherwise rebuild every managed field.
    pub fn init(&mut self, stored_data_up_to_date: bool) -> Result<()> {
        if self.has_stored_data() && stored_data_up_to_date {
            self.load_stored()?;
        } else {
            self.build()?;
        }
        tracing::info!(
            "Initialized completion data for {} fields in {:?}",
            self.fields.len(),
            self.suggester_dir
        );
        Ok(())
    }

    fn has_stored_data(&self) -> bool {
        match std::fs::read_dir(&self.suggester_dir) {
            Ok(mut entries) => entries.next().is_some(),
            Err(_) => false,
        }
    }

    fn load_stored(&mut self) -> Result<()> {
        let fields: Vec<String> = self.fields.iter().cloned().collect();
        let reader = self.dictionary.open()?;

        for field in &fields {
            let path = wfst_file_path(&self.suggester_dir, field);
            if path.exists() {
                match CompletionLookup::load(&path) {
                    Ok(lookup) => {
                        self.lookups.insert(field.clone(), FieldState::Built(lookup));
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Could not load completion data for field '{}' in {:?}: {}",
                            field,
                            self.suggester_dir,
                            e
                        );
                        self.lookups.insert(field.clone(), FieldState::Failed);
                    }
                }
            } else {
                tracing::info!(
                    "Missing completion data file for field '{}' in {:?}, creating a new one",
                    field,
                    self.suggester_dir
                );
                let outcome = build_field(
                    reader.as_ref(),
                    field,
                    self.scorer.as_ref(),
                    self.popularity.as_ref(),
                    self.config.searched_multiplier,
                    &self.scratch,
                );
                install_build_outcome(
                    &mut self.lookups,
                    &mut self.average_lengths,
                    &self.suggester_dir,
                    &path,
                    field,
                    outcome,
                );
            }
        }

        Ok(())
    }

    /// Rebuild every managed field from the term dictionary and persist the
    /// results. The dictionary handle is opened once for the whole pass.
    pub fn build(&mut self) -> Result<()> {
        let fields: Vec<String> = self.fields.iter().cloned().collect();
        let reader = self.dictionary.open()?;

        for field in &fields {
            let path = wfst_file_path(&self.suggester_dir, field);
            let outcome = build_field(
                reader.as_ref(),
                field,
                self.scorer.as_ref(),
                self.popularity.as_ref(),
                self.config.searched_multiplier,
                &self.scratch,
            );
            install_build_outcome(
                &mut self.lookups,
                &mut self.average_lengths,
                &self.suggester_dir,
                &path,
                field,
                outcome,
            );
        }

        Ok(())
    }

    /// Up to `result_size` ranked completions of `prefix` in `field`.
    ///
    /// A field that is unmanaged, unbuilt, or failed yields an empty result
    /// and a logged warning; lookups are never fatal to the caller.
    pub fn lookup(&self, field: &str, prefix: &str, result_size: usize) -> Vec<Completion> {
        match self.lookups.get(field) {
            Some(FieldState::Built(lookup)) => lookup.lookup(prefix, result_size),
            _ => {
                tracing::warn!(
                    "No completion data for field '{}' in {:?}",
                    field,
                    self.suggester_dir
                );
                Vec::new()
            }
        }
    }

    /// [`lookup`](Self::lookup) with the configured default result size.
    pub fn suggest(&self, field: &str, prefix: &str) -> Vec<Completion> {
        self.lookup(field, prefix, self.config.max_results)
    }

    /// Average term length of `field`, recorded by the most recent build
    /// pass that processed at least one term. `None` distinguishes "never
    /// computed" from a zero average.
    pub fn average_term_length(&self, field: &str) -> Option<f64> {
        self.average_lengths.get(field).copied()
    }

    /// Number of terms in the field's structure.
    pub fn term_count(&self, field: &str) -> Result<usize> {
        Ok(self.built(field)?.count())
    }

    /// Whether `text` is a term of `field`.
    pub fn has_term(&self, field: &str, text: &str) -> Result<bool> {
        Ok(self.built(field)?.contains(text))
    }

    /// Borrow the underlying structure of a ready field.
    pub fn completion_lookup(&self, field: &str) -> Option<&CompletionLookup> {
        match self.lookups.get(field) {
            Some(FieldState::Built(lookup)) => Some(lookup),
            _ => None,
        }
    }

    /// Lifecycle state of a managed field, `None` for unmanaged fields.
    pub fn field_status(&self, field: &str) -> Option<FieldStatus> {
        self.lookups.get(field).map(|state| match state {
            FieldState::Unbuilt => FieldStatus::Unbuilt,
            FieldState::Built(_) => FieldStatus::Ready,
            FieldState::Failed => FieldStatus::Failed,
        })
    }

    fn built(&self, field: &str) -> Result<&CompletionLookup> {
        match self.lookups.get(field) {
            Some(FieldState::Built(lookup)) => Ok(lookup),
            _ => Err(SuggestError::FieldNotInitialized {
                field: field.to_string(),
            }),
        }
    }

    /// Release the scratch-space resource. Consuming `self` makes "call
    /// exactly once" structural; release errors propagate to the caller's
    /// teardown.
    pub fn close(self) -> Result<()> {
        self.scratch.close()
    }
}

fn wfst_file_path(suggester_dir: &Path, field: &str) -> PathBuf {
    suggester_dir.join(format!("{}{}", sanitize_filename(field), WFST_FILE_SUFFIX))
}

fn build_field(
    reader: &dyn TermDictReader,
    field: &str,
    scorer: &dyn BaseScorer,
    popularity: &dyn PopularityProvider,
    multiplier: u64,
    scratch: &ScratchSpace,
) -> Result<(CompletionLookup, Option<f64>)> {
    let timer = Timer::new(format!("build completion structure for '{}'", field));

    let cursor = reader.terms(field)?;
    let counter = popularity.counter_for(field);
    let mut stream = RankedTermStream::new(cursor, field, scorer, counter, multiplier);

    let lookup = CompletionLookup::build(&mut stream, scratch)?;
    let average = if lookup.count() > 0 {
        Some(stream.term_length_accumulator() as f64 / lookup.count() as f64)
    } else {
        None
    };

    timer.stop();
    Ok((lookup, average))
}

fn install_build_outcome(
    lookups: &mut HashMap<String, FieldState>,
    average_lengths: &mut HashMap<String, f64>,
    suggester_dir: &Path,
    path: &Path,
    field: &str,
    outcome: Result<(CompletionLookup, Option<f64>)>,
) {
    match outcome {
        Ok((lookup, average)) => {
            // A persist failure keeps the in-memory structure serving; the
            // missing file self-heals on the next load pass.
            if let Err(e) = lookup.store(path) {
                tracing::warn!(
                    "Could not persist completion data for field '{}' in {:?}: {}",
                    field,
                    suggester_dir,
                    e
                );
            }
            match average {
                Some(average) => {
                    average_lengths.insert(field.to_string(), average);
                }
                None => {
                    average_lengths.remove(field);
                }
            }
            lookups.insert(field.to_string(), FieldState::Built(lookup));
        }
        Err(e) => {
            tracing::warn!(
                "Could not build completion structure for field '{}' in {:?}: {}",
                field,
                suggester_dir,
                e
            );
            average_lengths.remove(field);
            lookups.insert(field.to_string(), FieldState::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{MemoryTermDictionary, TermCursor};
    use crate::popularity::{MemoryPopularity, NoPopularity};
    use crate::score::UniformScorer;
    use crate::stream::MAX_TERM_BYTES;
    use std::collections::HashMap;

    fn base_scores(scores: &[(&str, u64)]) -> Box<dyn BaseScorer> {
        let scores: HashMap<Vec<u8>, u64> = scores
            .iter()
            .map(|(term, score)| (term.as_bytes().to_vec(), *score))
            .collect();
        Box::new(move |_field: &str, term: &[u8]| scores.get(term).copied().unwrap_or(0))
    }

    fn terms_of(results: &[Completion]) -> Vec<&str> {
        results.iter().map(|c| c.term.as_str()).collect()
    }

    #[test]
    fn test_popular_term_outranks_higher_base_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "cat"]);

        let mut popularity = MemoryPopularity::new();
        popularity.set("full", "car", 10);

        let config = SuggesterConfig {
            max_results: 10,
            searched_multiplier: 100,
        };
        let mut suggester = ProjectSuggester::with_config(
            dictionary,
            dir.path().join("suggester"),
            Box::new(popularity),
            base_scores(&[("cat", 5), ("car", 3)]),
            config,
        )
        .unwrap();
        suggester.set_fields(["full"]);
        suggester.init(false).unwrap();

        let results = suggester.lookup("full", "ca", 2);
        assert_eq!(terms_of(&results), vec!["car", "cat"]);
        assert_eq!(results[0].weight, 3 + 10 * 100);
        assert_eq!(results[1].weight, 5);

        suggester.close().unwrap();
    }

    #[test]
    fn test_round_trip_through_stored_files() {
        let dir = tempfile::tempdir().unwrap();
        let suggester_dir = dir.path().join("suggester");

        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "carp", "cat"]);

        let mut first = ProjectSuggester::new(
            dictionary.clone(),
            &suggester_dir,
            Box::new(NoPopularity),
            base_scores(&[("car", 30), ("carp", 20), ("cat", 10)]),
        )
        .unwrap();
        first.set_fields(["full"]);
        first.init(false).unwrap();

        let built_results = first.lookup("full", "ca", 10);
        let built_count = first.term_count("full").unwrap();
        assert!(first.average_term_length("full").is_some());
        first.close().unwrap();

        let mut second = ProjectSuggester::new(
            dictionary,
            &suggester_dir,
            Box::new(NoPopularity),
            base_scores(&[]),
        )
        .unwrap();
        second.set_fields(["full"]);
        second.init(true).unwrap();

        assert_eq!(second.field_status("full"), Some(FieldStatus::Ready));
        assert_eq!(second.lookup("full", "ca", 10), built_results);
        assert_eq!(second.term_count("full").unwrap(), built_count);
        assert!(second.has_term("full", "carp").unwrap());
        assert!(!second.has_term("full", "dog").unwrap());
        // Averages come from build passes only, never from loads.
        assert!(second.average_term_length("full").is_none());

        second.close().unwrap();
    }

    #[test]
    fn test_self_healing_load_builds_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let suggester_dir = dir.path().join("suggester");

        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "cat"]);
        dictionary.insert_all("defs", ["main"]);
        dictionary.insert_all("refs", ["usage", "user"]);

        let mut first = ProjectSuggester::new(
            dictionary.clone(),
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        first.set_fields(["full", "defs"]);
        first.init(false).unwrap();
        first.close().unwrap();

        let mut second = ProjectSuggester::new(
            dictionary,
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        second.set_fields(["full", "defs", "refs"]);
        second.init(true).unwrap();

        for field in ["full", "defs", "refs"] {
            assert_eq!(second.field_status(field), Some(FieldStatus::Ready));
        }
        assert_eq!(terms_of(&second.lookup("refs", "us", 10)), vec!["usage", "user"]);
        assert!(suggester_dir.join("refs.wfst").exists());

        // full/defs were loaded, not rebuilt: no average was computed for
        // them, while the freshly built refs has one.
        assert!(second.average_term_length("full").is_none());
        assert!(second.average_term_length("defs").is_none());
        assert!(second.average_term_length("refs").is_some());

        second.close().unwrap();
    }

    #[test]
    fn test_zero_term_field_has_no_average() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = MemoryTermDictionary::new();

        let mut suggester = ProjectSuggester::new(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["empty"]);
        suggester.init(false).unwrap();

        assert_eq!(suggester.field_status("empty"), Some(FieldStatus::Ready));
        assert_eq!(suggester.term_count("empty").unwrap(), 0);
        assert!(suggester.average_term_length("empty").is_none());
        assert!(suggester.lookup("empty", "a", 10).is_empty());
    }

    #[test]
    fn test_oversized_terms_excluded_from_count_and_average() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "cat"]);
        dictionary.insert("full", vec![b'z'; MAX_TERM_BYTES + 1]);

        let mut suggester = ProjectSuggester::new(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["full"]);
        suggester.init(false).unwrap();

        assert_eq!(suggester.term_count("full").unwrap(), 2);
        assert_eq!(suggester.average_term_length("full"), Some(3.0));
    }

    #[test]
    fn test_lookup_on_unmanaged_field_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert("full", "cat");

        let mut suggester = ProjectSuggester::new(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["full"]);
        suggester.init(false).unwrap();

        assert!(suggester.lookup("nope", "ca", 10).is_empty());
        assert!(suggester.field_status("nope").is_none());
    }

    #[test]
    fn test_queries_before_init_fail_lookup_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert("full", "cat");

        let mut suggester = ProjectSuggester::new(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["full"]);

        assert_eq!(suggester.field_status("full"), Some(FieldStatus::Unbuilt));
        assert!(matches!(
            suggester.term_count("full"),
            Err(SuggestError::FieldNotInitialized { .. })
        ));
        assert!(matches!(
            suggester.has_term("full", "cat"),
            Err(SuggestError::FieldNotInitialized { .. })
        ));
        assert!(suggester.lookup("full", "ca", 10).is_empty());
        assert!(suggester.completion_lookup("full").is_none());
    }

    #[test]
    fn test_init_without_currency_assertion_rebuilds() {
        let dir = tempfile::tempdir().unwrap();
        let suggester_dir = dir.path().join("suggester");

        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "cat"]);

        let mut first = ProjectSuggester::new(
            dictionary.clone(),
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        first.set_fields(["full"]);
        first.init(false).unwrap();
        first.close().unwrap();

        let mut second = ProjectSuggester::new(
            dictionary,
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        second.set_fields(["full"]);
        second.init(false).unwrap();

        // A rebuild recomputes statistics; a load would not have.
        assert_eq!(second.average_term_length("full"), Some(3.0));
    }

    #[test]
    fn test_suggest_uses_configured_result_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["ca", "cab", "cad", "car", "cat"]);

        let config = SuggesterConfig {
            max_results: 3,
            searched_multiplier: 100,
        };
        let mut suggester = ProjectSuggester::with_config(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
            config,
        )
        .unwrap();
        suggester.set_fields(["full"]);
        suggester.init(false).unwrap();

        assert_eq!(suggester.suggest("full", "ca").len(), 3);
    }

    #[test]
    fn test_field_name_sanitized_in_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let suggester_dir = dir.path().join("suggester");

        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert("path/raw", "cat");

        let mut suggester = ProjectSuggester::new(
            dictionary,
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["path/raw"]);
        suggester.init(false).unwrap();

        assert!(suggester_dir.join("path_raw.wfst").exists());
        assert_eq!(terms_of(&suggester.lookup("path/raw", "c", 10)), vec!["cat"]);
    }

    // Dictionary that fails term enumeration for one specific field.
    #[derive(Clone)]
    struct FlakyDictionary {
        good: MemoryTermDictionary,
        bad_field: String,
    }

    impl TermDictionary for FlakyDictionary {
        fn open(&self) -> Result<Box<dyn TermDictReader + '_>> {
            Ok(Box::new(FlakyReader {
                bad_field: &self.bad_field,
                inner: self.good.open()?,
            }))
        }
    }

    struct FlakyReader<'a> {
        bad_field: &'a str,
        inner: Box<dyn TermDictReader + 'a>,
    }

    impl TermDictReader for FlakyReader<'_> {
        fn terms(&self, field: &str) -> Result<Box<dyn TermCursor + '_>> {
            if field == self.bad_field {
                return Err(SuggestError::Dictionary {
                    field: field.to_string(),
                    details: "simulated enumeration failure".to_string(),
                });
            }
            self.inner.terms(field)
        }
    }

    #[test]
    fn test_single_field_failure_leaves_siblings_usable() {
        let dir = tempfile::tempdir().unwrap();
        let mut good = MemoryTermDictionary::new();
        good.insert_all("full", ["car", "cat"]);

        let dictionary = FlakyDictionary {
            good,
            bad_field: "defs".to_string(),
        };

        let mut suggester = ProjectSuggester::new(
            dictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["defs", "full"]);
        suggester.init(false).unwrap();

        assert_eq!(suggester.field_status("defs"), Some(FieldStatus::Failed));
        assert_eq!(suggester.field_status("full"), Some(FieldStatus::Ready));
        assert!(suggester.lookup("defs", "m", 10).is_empty());
        assert_eq!(terms_of(&suggester.lookup("full", "ca", 10)), vec!["car", "cat"]);
        assert!(suggester.average_term_length("defs").is_none());
        assert!(matches!(
            suggester.term_count("defs"),
            Err(SuggestError::FieldNotInitialized { .. })
        ));
    }

    // Dictionary that cannot be opened at all.
    struct ClosedDictionary;

    impl TermDictionary for ClosedDictionary {
        fn open(&self) -> Result<Box<dyn TermDictReader + '_>> {
            Err(SuggestError::Dictionary {
                field: "*".to_string(),
                details: "index unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_dictionary_open_failure_aborts_init() {
        let dir = tempfile::tempdir().unwrap();
        let mut suggester = ProjectSuggester::new(
            ClosedDictionary,
            dir.path().join("suggester"),
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        suggester.set_fields(["full"]);

        assert!(matches!(
            suggester.init(false),
            Err(SuggestError::Dictionary { .. })
        ));
        assert_eq!(suggester.field_status("full"), Some(FieldStatus::Unbuilt));
    }

    #[test]
    fn test_corrupt_stored_file_marks_field_failed() {
        let dir = tempfile::tempdir().unwrap();
        let suggester_dir = dir.path().join("suggester");

        let mut dictionary = MemoryTermDictionary::new();
        dictionary.insert_all("full", ["car", "cat"]);
        dictionary.insert("defs", "main");

        let mut first = ProjectSuggester::new(
            dictionary.clone(),
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        first.set_fields(["full", "defs"]);
        first.init(false).unwrap();
        first.close().unwrap();

        std::fs::write(suggester_dir.join("full.wfst"), b"garbage").unwrap();

        let mut second = ProjectSuggester::new(
            dictionary,
            &suggester_dir,
            Box::new(NoPopularity),
            Box::new(UniformScorer(1)),
        )
        .unwrap();
        second.set_fields(["full", "defs"]);
        second.init(true).unwrap();

        assert_eq!(second.field_status("full"), Some(FieldStatus::Failed));
        assert_eq!(second.field_status("defs"), Some(FieldStatus::Ready));
        assert!(second.lookup("full", "ca", 10).is_empty());
    }
}
