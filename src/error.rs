//! # Validation Errors
//!
//! Error type for the [`Kvnr`](crate::Kvnr) constructor path. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The boolean [`validate`](crate::validate) entry point never surfaces
//! these — malformed input is classification there, not a fault. Errors
//! exist only where a caller asked for diagnostics.

use thiserror::Error;

/// Why a candidate string was rejected as a KVNR.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate does not match the structural format: one uppercase
    /// ASCII letter followed by nine ASCII digits.
    #[error("invalid KVNR format (expected one uppercase letter followed by nine digits): {0:?}")]
    InvalidFormat(String),

    /// The candidate is structurally well-formed but its trailing digit
    /// does not match the checksum of the preceding nine characters.
    #[error("KVNR check digit mismatch in {kvnr:?}: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// The rejected candidate.
        kvnr: String,
        /// The check digit computed from the 9-character body.
        expected: u8,
        /// The digit actually present in position 10.
        found: u8,
    },
}
