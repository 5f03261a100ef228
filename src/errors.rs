//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the suggester, providing structured error
//! types for every failure the crate can surface.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from configuration, dictionary enumeration,
//!   automaton construction, and persistence
//! - **Output**: Structured error types with context
//! - **Error Categories**: Configuration, Dictionary, Automaton, Storage
//!
//! ## Key Features
//! - Single error enum with detailed context per variant
//! - Automatic conversion from I/O and automaton errors
//! - Category accessor for structured logging

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SuggestError>;

/// Error types for the suggester
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised by the completion automaton
    #[error("completion automaton error: {0}")]
    Automaton(#[from] fst::Error),

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("validation failed for '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Term dictionary enumeration errors
    #[error("term dictionary error for field '{field}': {details}")]
    Dictionary { field: String, details: String },

    /// Query against a field that was never built or loaded
    #[error("no completion data initialized for field '{field}'")]
    FieldNotInitialized { field: String },

    /// A persisted completion structure could not be revived
    #[error("stored completion data at {path:?} is corrupted: {details}")]
    StoredDataCorrupted { path: PathBuf, details: String },
}

impl SuggestError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SuggestError::Config { .. } | SuggestError::ValidationFailed { .. } => "configuration",
            SuggestError::Dictionary { .. } => "dictionary",
            SuggestError::Automaton(_) => "automaton",
            SuggestError::Io(_) | SuggestError::StoredDataCorrupted { .. } => "storage",
            SuggestError::FieldNotInitialized { .. } => "lookup",
        }
    }

    /// Check if the error is recoverable by rebuilding the affected field
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SuggestError::StoredDataCorrupted { .. } | SuggestError::FieldNotInitialized { .. }
        )
    }
}
