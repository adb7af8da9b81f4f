//! Error types for Vexim CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (3=not_found, 4=validation, 5=share, 8=io)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use thiserror::Error;

/// Result type alias for Vexim operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string; shell pipelines on the
/// exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Not Found (exit 3)
    VehicleNotFound,
    CategoryNotFound,
    AmbiguousId,

    // Validation (exit 4)
    RequiredField,
    InvalidPrice,
    EmptyGarage,

    // Share (exit 5)
    ShareError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::VehicleNotFound => "VEHICLE_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::AmbiguousId => "AMBIGUOUS_ID",
            Self::RequiredField => "REQUIRED_FIELD",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::EmptyGarage => "EMPTY_GARAGE",
            Self::ShareError => "SHARE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::VehicleNotFound | Self::CategoryNotFound | Self::AmbiguousId => 3,
            Self::RequiredField | Self::InvalidPrice | Self::EmptyGarage => 4,
            Self::ShareError => 5,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether a caller should retry with corrected input.
    ///
    /// True for validation errors and ambiguous IDs. False for
    /// not-found, share, I/O, or internal errors.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RequiredField | Self::InvalidPrice | Self::EmptyGarage | Self::AmbiguousId
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Vexim CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Vehicle not found: {id}")]
    VehicleNotFound {
        id: String,
        /// Ids currently in the garage, for hint display.
        available: Vec<String>,
    },

    #[error("Ambiguous vehicle id '{id}' (matches: {})", matches.join(", "))]
    AmbiguousVehicleId { id: String, matches: Vec<String> },

    #[error("Custom category not found: {value}")]
    CategoryNotFound { value: String },

    #[error("{field} is required")]
    RequiredField { field: &'static str },

    #[error("Price must be a valid positive number (got '{input}')")]
    InvalidPrice { input: String },

    #[error("No vehicles in the garage")]
    EmptyGarage,

    #[error("Could not share the SQL statement: {0}")]
    Share(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::VehicleNotFound { .. } => ErrorCode::VehicleNotFound,
            Self::AmbiguousVehicleId { .. } => ErrorCode::AmbiguousId,
            Self::CategoryNotFound { .. } => ErrorCode::CategoryNotFound,
            Self::RequiredField { .. } => ErrorCode::RequiredField,
            Self::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            Self::EmptyGarage => ErrorCode::EmptyGarage,
            Self::Share(_) => ErrorCode::ShareError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for scripts and humans.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::VehicleNotFound { id, available } => {
                let mut hint = format!("No vehicle with id '{id}'.");
                if available.is_empty() {
                    hint.push_str(" The garage is empty.");
                } else {
                    hint.push_str(" Current ids:\n");
                    for current in available.iter().take(5) {
                        hint.push_str(&format!("    {current}\n"));
                    }
                    if available.len() > 5 {
                        hint.push_str(&format!("    ... and {} more\n", available.len() - 5));
                    }
                    hint.push_str("  Use `vx list` for details.");
                }
                Some(hint)
            }

            Self::AmbiguousVehicleId { matches, .. } => {
                Some(format!("Matching ids: {}", matches.join(", ")))
            }

            Self::CategoryNotFound { value } => Some(format!(
                "No custom category '{value}'. Use `vx category list` to see them \
                 (built-in categories cannot be removed)."
            )),

            Self::RequiredField { .. } | Self::InvalidPrice { .. } => Some(
                "Usage: vx add <spawn-name> <display-label> <price> [--category <value>]"
                    .to_string(),
            ),

            Self::EmptyGarage => Some(
                "Add at least one vehicle first:\n  \
                 vx add <spawn-name> <display-label> <price>"
                    .to_string(),
            ),

            Self::Share(_) | Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
