//! # Error Types
//!
//! Structured error types for calc_core. Every failure the engine can report
//! is a variant here, carrying enough context for a caller to show a message
//! or react programmatically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn check_roll(width_in: f64) -> CalcResult<()> {
//!     if width_in <= 0.0 {
//!         return Err(CalcError::invalid_option(
//!             "roll_width",
//!             width_in.to_string(),
//!             "Roll width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimating operations.
///
/// A call to the engine produces exactly one of a full result or one of
/// these errors; there are no partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Width or height is missing or does not parse to a positive finite number
    #[error("Invalid dimensions: width '{width}', height '{height}'")]
    InvalidDimensions { width: String, height: String },

    /// Neither orientation of the item fits across the printable roll width
    #[error(
        "Item {item_width_in} x {item_height_in} in exceeds printable width {printable_width_in} in"
    )]
    InfeasibleLayout {
        item_width_in: f64,
        item_height_in: f64,
        printable_width_in: f64,
    },

    /// The item does not fit the stock sheet in either orientation
    #[error(
        "No yield: {item_width_in} x {item_height_in} in does not fit the {part_type} stock sheet"
    )]
    NoYield {
        part_type: String,
        item_width_in: f64,
        item_height_in: f64,
    },

    /// Part type selector is not in the catalog
    #[error("Unknown part type: {value}")]
    UnknownPartType { value: String },

    /// An option value is not one of the recognized choices
    #[error("Invalid option '{option}': {value} - {reason}")]
    InvalidOption {
        option: String,
        value: String,
        reason: String,
    },

    /// Material registry override could not be loaded
    #[error("Registry error: {reason}")]
    RegistryError { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidDimensions error from the raw text inputs
    pub fn invalid_dimensions(width: Option<&str>, height: Option<&str>) -> Self {
        CalcError::InvalidDimensions {
            width: width.unwrap_or_default().to_string(),
            height: height.unwrap_or_default().to_string(),
        }
    }

    /// Create an InfeasibleLayout error
    pub fn infeasible_layout(
        item_width_in: f64,
        item_height_in: f64,
        printable_width_in: f64,
    ) -> Self {
        CalcError::InfeasibleLayout {
            item_width_in,
            item_height_in,
            printable_width_in,
        }
    }

    /// Create a NoYield error
    pub fn no_yield(part_type: impl Into<String>, item_width_in: f64, item_height_in: f64) -> Self {
        CalcError::NoYield {
            part_type: part_type.into(),
            item_width_in,
            item_height_in,
        }
    }

    /// Create an UnknownPartType error
    pub fn unknown_part_type(value: impl Into<String>) -> Self {
        CalcError::UnknownPartType { value: value.into() }
    }

    /// Create an InvalidOption error
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidOption {
            option: option.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a RegistryError
    pub fn registry(reason: impl Into<String>) -> Self {
        CalcError::RegistryError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            CalcError::InfeasibleLayout { .. } => "INFEASIBLE_LAYOUT",
            CalcError::NoYield { .. } => "NO_YIELD",
            CalcError::UnknownPartType { .. } => "UNKNOWN_PART_TYPE",
            CalcError::InvalidOption { .. } => "INVALID_OPTION",
            CalcError::RegistryError { .. } => "REGISTRY_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Message suitable for showing next to the Calculate button.
    ///
    /// The two errors an estimator hits in normal use keep the wording the
    /// shop is used to; everything else falls back to the Display text.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidDimensions { .. } => {
                "Please enter valid numbers for width and height.".to_string()
            }
            CalcError::InfeasibleLayout { .. } => {
                "Error: Both dimensions exceed the roll width.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::RegistryError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::infeasible_layout(60.5, 70.5, 52.5);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InfeasibleLayout\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_dimensions(Some("abc"), Some("24")).error_code(),
            "INVALID_DIMENSIONS"
        );
        assert_eq!(CalcError::unknown_part_type("sticker").error_code(), "UNKNOWN_PART_TYPE");
        assert_eq!(CalcError::no_yield("aluminum_sign", 100.0, 100.0).error_code(), "NO_YIELD");
    }

    #[test]
    fn test_user_messages() {
        let err = CalcError::invalid_dimensions(None, Some("24"));
        assert_eq!(err.user_message(), "Please enter valid numbers for width and height.");

        let err = CalcError::infeasible_layout(60.0, 60.0, 52.5);
        assert_eq!(err.user_message(), "Error: Both dimensions exceed the roll width.");
    }

    #[test]
    fn test_missing_dimension_is_blank() {
        match CalcError::invalid_dimensions(None, Some("24")) {
            CalcError::InvalidDimensions { width, height } => {
                assert_eq!(width, "");
                assert_eq!(height, "24");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
