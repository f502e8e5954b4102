//! # kvnr — German Health-Insurance Number Validation
//!
//! Validation and check-digit computation for the KVNR
//! (Krankenversichertennummer), the German statutory health-insurance
//! personal identifier: one uppercase letter followed by nine digits,
//! the last of which is a checksum over the preceding nine characters.
//!
//! ## Entry Points
//!
//! - [`validate`] — total boolean check, the embedding primitive for
//!   validation pipelines. Any string in, `true`/`false` out, never
//!   panics.
//! - [`Kvnr`] — validated newtype with diagnostics. Constructed only
//!   through [`Kvnr::new`], so a `Kvnr` value is always valid; invalid
//!   input yields a structured [`ValidationError`].
//! - [`compute_check_digit`] — the underlying checksum over a
//!   9-character body, for callers that generate identifiers or need
//!   the expected digit directly.
//!
//! ## Check-Digit Scheme
//!
//! The letter maps to its alphabet position (A→1 … Z→26), zero-padded
//! to two digits; together with the eight serial digits this forms a
//! 10-digit sequence weighted alternately 1,2,1,2,…. Products of two
//! decimal digits fold to their digit sum (Luhn-style), and the folded
//! sum modulo 10 is the check digit.
//!
//! ## Crate Policy
//!
//! - Pure and stateless: no I/O, no shared state, safe to call
//!   concurrently without synchronization.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests — `validate` is total
//!   over all string inputs.

#![deny(unsafe_code)]

pub mod check_digit;
pub mod error;
pub mod identifier;

// Re-export primary items for ergonomic imports.
pub use check_digit::compute_check_digit;
pub use error::ValidationError;
pub use identifier::{validate, Kvnr};
