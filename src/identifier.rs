//! # KVNR Validation and Newtype
//!
//! [`validate`] is the total boolean entry point: any string in, `true`
//! or `false` out, never a panic. [`Kvnr`] is the domain-primitive
//! newtype for callers that want a proof-of-validity value and
//! diagnostics on rejection — a constructed `Kvnr` is always valid.
//!
//! ## Format
//!
//! A KVNR (Krankenversichertennummer, the German statutory
//! health-insurance personal identifier) is exactly 10 characters:
//! one uppercase ASCII letter, eight digits, and a trailing check
//! digit computed over the first nine characters.

use serde::{Deserialize, Serialize};

use crate::check_digit::compute_check_digit;
use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Check whether a candidate string is a valid KVNR.
///
/// Returns `true` iff the candidate is exactly one uppercase ASCII
/// letter followed by nine ASCII digits, and the tenth character equals
/// the check digit computed over the first nine.
///
/// Total over all inputs: empty strings, wrong lengths, lowercase
/// letters, and non-ASCII data all classify as `false`. No input
/// panics. Pure and stateless, safe to call concurrently.
pub fn validate(candidate: &str) -> bool {
    if !is_well_formed(candidate) {
        return false;
    }

    // The format check restricts the letter to A-Z, so the None arm is
    // unreachable here; kept as a guard so a malformed body can only
    // fail the comparison, never slip through.
    match compute_check_digit(&candidate[..9]) {
        Some(digit) => candidate.as_bytes()[9] - b'0' == digit,
        None => false,
    }
}

/// Structural format check: `^[A-Z][0-9]{9}$`.
fn is_well_formed(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 10
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// German statutory health-insurance personal identifier (KVNR).
///
/// Validated at construction: both the structural format and the check
/// digit are enforced by [`Kvnr::new`], so a `Kvnr` value is always a
/// valid identifier.
///
/// # Validation
///
/// - Exactly 10 characters: `[A-Z]` followed by `[0-9]{9}`
/// - Trailing digit must equal the checksum of the first nine characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Kvnr(String);

impl_validating_deserialize!(Kvnr);

impl Kvnr {
    /// Create a KVNR from a string, validating format and check digit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFormat`] if the string does not
    /// match `^[A-Z][0-9]{9}$`, or [`ValidationError::CheckDigitMismatch`]
    /// if the trailing digit disagrees with the computed checksum.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_well_formed(&s) {
            return Err(ValidationError::InvalidFormat(s));
        }

        let expected = match compute_check_digit(&s[..9]) {
            Some(digit) => digit,
            // Unreachable after is_well_formed, kept as a guard.
            None => return Err(ValidationError::InvalidFormat(s)),
        };
        let found = s.as_bytes()[9] - b'0';
        if found != expected {
            return Err(ValidationError::CheckDigitMismatch {
                kvnr: s,
                expected,
                found,
            });
        }

        Ok(Self(s))
    }

    /// Access the KVNR string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading letter (A-Z).
    pub fn letter(&self) -> char {
        self.0.as_bytes()[0] as char
    }

    /// The eight-digit serial section between the letter and the
    /// check digit.
    pub fn serial(&self) -> &str {
        &self.0[1..9]
    }

    /// The trailing check digit, as its numeric value.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[9] - b'0'
    }
}

impl std::fmt::Display for Kvnr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Kvnr {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
