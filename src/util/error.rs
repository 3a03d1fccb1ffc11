//! Error types for the bopjson library.

use thiserror::Error;

/// Main error type for level building and export.
#[derive(Error, Debug)]
pub enum Error {
    /// Integer above the representable range of its field
    #[error("Overflow: {field} = {value} exceeds maximum {max} (min {min})")]
    Overflow {
        field: String,
        value: i128,
        min: i128,
        max: i128,
    },

    /// Integer below the representable range of its field
    #[error("Underflow: {field} = {value} is below minimum {min} (max {max})")]
    Underflow {
        field: String,
        value: i128,
        min: i128,
        max: i128,
    },

    /// Attribute assignment with a value of the wrong shape
    #[error("Type mismatch on {attribute}: expected {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Attribute name not recognized by the block kind
    #[error("{attribute} is not an attribute of {kind}")]
    UnknownAttribute { kind: &'static str, attribute: String },

    /// Attribute that can only change through dedicated methods
    #[error("{attribute} is read-only; {hint}")]
    ReadOnlyAttribute {
        attribute: String,
        hint: &'static str,
    },

    /// Value in range for its width but rejected by the field
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// Position batch that does not match the current timing mode
    #[error("Kinematics mode mismatch: {0}")]
    KinematicsMode(&'static str),

    /// Index past the end of a sequence
    #[error("Index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// UID allocation kept colliding
    #[error("Could not mint a unique UID after {attempts} attempts")]
    UidExhausted { attempts: usize },

    /// No block registered under the UID
    #[error("Level does not contain an object with uid {0}")]
    ObjectNotFound(u32),

    /// Portal destination missing or not a portal
    #[error("Portal \"{portal}\" has invalid destination {destination}: {reason}")]
    InvalidDestination {
        portal: String,
        destination: i64,
        reason: &'static str,
    },

    /// Block kind newer than the level's game version
    #[error("{kind} requires game version {required}, level targets {level}")]
    UnsupportedVersion {
        kind: &'static str,
        required: String,
        level: String,
    },

    /// Malformed game version string
    #[error("Invalid game version: {0}")]
    InvalidVersion(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp formatting error
    #[error("Time format error: {0}")]
    TimeFormat(#[from] time::error::Format),
}

impl Error {
    /// Create an invalid value error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for the two range errors.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Overflow { .. } | Self::Underflow { .. })
    }
}

/// Result type alias for bopjson operations.
pub type Result<T> = std::result::Result<T, Error>;
