//! # dk-holidays
//!
//! Asynchronous holiday lookup.  The [`HolidaySource`] trait is the seam: a
//! source implements one fetch operation (`holidays(year)`) and gets the
//! day-level `is_holiday` predicate for free.  [`MockHolidaySource`] is the
//! built-in source simulating a slow external service;
//! [`StaticHolidaySource`] is a table-backed one with no delay.
//!
//! The free functions [`get_holidays`] and [`is_holiday`] query the default
//! (mock) source, mirroring the flat surface this library replaced.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Built-in mock source with simulated network latency.
pub mod mock;

/// The `HolidaySource` trait.
pub mod source;

/// Table-backed source without artificial delay.
pub mod table;

use chrono::{NaiveDate, NaiveDateTime};
use dk_core::errors::Result;

pub use mock::MockHolidaySource;
pub use source::HolidaySource;
pub use table::StaticHolidaySource;

/// Return the holiday set for `year` from the default (mock) source, after
/// its simulated fetch delay.
///
/// # Errors
/// Fails only if `year` is outside chrono's representable range.
pub async fn get_holidays(year: i32) -> Result<Vec<NaiveDate>> {
    MockHolidaySource::default().holidays(year).await
}

/// Return `true` iff `date`'s calendar day is a holiday according to the
/// default (mock) source, after its simulated fetch delay.
///
/// # Errors
/// Fails only if `date`'s year is outside chrono's representable range.
pub async fn is_holiday(date: NaiveDateTime) -> Result<bool> {
    MockHolidaySource::default().is_holiday(date).await
}
