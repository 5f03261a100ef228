//! # Utilities Module
//!
//! ## Purpose
//! Small helpers shared across the suggester: build-duration timing and
//! deterministic file naming.

use std::time::Instant;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop timer and log duration
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!("Timer '{}' completed in {}ms", self.name, elapsed);
        elapsed
    }
}

/// Sanitize a field name for safe, deterministic file naming.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("full"), "full");
        assert_eq!(sanitize_filename("path/raw"), "path_raw");
        assert_eq!(sanitize_filename("a b:c"), "a_b_c");
        assert_eq!(sanitize_filename("refs.v2"), "refs.v2");
    }

    #[test]
    fn test_timer_elapsed() {
        let timer = Timer::new("noop");
        assert!(timer.elapsed_ms() < 1000);
        timer.stop();
    }
}
