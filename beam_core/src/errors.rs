//! # Error Types
//!
//! Structured error types for beam_core. Invalid input is a caller bug, not
//! a transient condition: the engine raises it synchronously and never
//! clamps a bad value to a default.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(span_m: f64) -> BeamResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for the beam analysis engine.
///
/// The engine has exactly one failure mode: a parameter that violates the
/// positivity/shape constraints of the closed-form model. There is no I/O,
/// no external resource, and no unbounded iteration, so no other variants
/// exist.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
