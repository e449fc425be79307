//! # dk-time
//!
//! Date arithmetic by unit, range membership, day-level comparison, and
//! current-date lookup.  Calendar math is delegated to [`chrono`]; this
//! crate supplies the unit/period types and the checked operation surface
//! on top of it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Date arithmetic and comparison functions.
pub mod date;

/// `DateUnit` — days, weeks, months, years.
pub mod date_unit;

/// `Period` — a time span in a `DateUnit`.
pub mod period;

pub use date::{add, current_year, is_before, is_same_day, is_within_range, today};
pub use date_unit::DateUnit;
pub use period::Period;
