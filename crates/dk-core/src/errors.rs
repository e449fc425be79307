//! Error types for datekit.
//!
//! The whole library surfaces exactly two failure kinds of its own:
//! invalid inputs to date arithmetic and mis-ordered range bounds.  Both
//! are synchronous and surfaced immediately at the call site.

use thiserror::Error;

/// The top-level error type used throughout datekit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date, amount, or period literal was not usable — typically an
    /// arithmetic result outside chrono's representable range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The `from` bound of a range check was after the `to` bound.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Failure reported by an external `HolidaySource` implementation
    /// (e.g. a network fetch).  No built-in source produces this variant.
    #[error("holiday source error: {0}")]
    Source(String),
}

/// Shorthand `Result` type used throughout datekit.
pub type Result<T, E = Error> = std::result::Result<T, E>;
