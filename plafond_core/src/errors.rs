//! # Error Types
//!
//! Structured error types for plafond_core. Validation failures carry the
//! offending field and value so that API consumers can report them back to
//! the client without string parsing.
//!
//! ## Example
//!
//! ```rust
//! use plafond_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_m2: f64) -> CalcResult<()> {
//!     if area_m2 <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_m2",
//!             area_m2.to_string(),
//!             "must be > 0",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_area(10.0).is_ok());
//! assert!(validate_area(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for plafond_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Validation
/// variants describe client-input problems; `CalculationFailed` and
/// `Internal` indicate faults that should not occur for validated input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Grid system not present in the catalog
    #[error("Unknown system: {system}")]
    SystemNotFound { system: String },

    /// Calculation failed (should not occur for validated input)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SystemNotFound error
    pub fn system_not_found(system: impl Into<String>) -> Self {
        CalcError::SystemNotFound {
            system: system.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a client-input error (as opposed to a system fault)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::SystemNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SystemNotFound { .. } => "SYSTEM_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
