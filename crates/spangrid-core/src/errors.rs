//! Error types for the spangrid engine.

use thiserror::Error;

/// Top-level error for a layout pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Span(#[from] SpanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An item failed to measure itself.
    #[error("Measurement failed: {0}")]
    Measure(String),
}

impl LayoutError {
    pub fn measure(message: impl Into<String>) -> Self {
        Self::Measure(message.into())
    }
}

/// Errors in an item's span declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("Span must be between 1 and {total_spans}, found {span} (item {index})")]
    SpanOutOfRange {
        index: usize,
        span: u32,
        total_spans: u32,
    },

    #[error("Every item in a span grid must declare a span; item {index} of {count} has none")]
    MissingSpan { index: usize, count: usize },
}

/// Errors in a layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid layout configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[cfg(feature = "serde")]
    #[error("Failed to parse layout configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
