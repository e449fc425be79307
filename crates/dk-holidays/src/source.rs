//! `HolidaySource` trait definition.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use dk_core::errors::Result;
use dk_time::date::is_same_day;

/// An asynchronous source of holiday dates.
///
/// Implementors provide the single fetch operation, [`holidays`]; the
/// day-level [`is_holiday`] predicate is derived from it.  Callers written
/// against this trait work unchanged when a real data source (network
/// service, database) is substituted for the built-in ones.
///
/// [`holidays`]: HolidaySource::holidays
/// [`is_holiday`]: HolidaySource::is_holiday
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch the holiday dates for `year`, in ascending order.
    async fn holidays(&self, year: i32) -> Result<Vec<NaiveDate>>;

    /// Return `true` iff `date`'s calendar day matches a holiday in its
    /// year, ignoring the time-of-day.
    async fn is_holiday(&self, date: NaiveDateTime) -> Result<bool> {
        let holidays = self.holidays(date.year()).await?;
        Ok(holidays
            .iter()
            .any(|&h| is_same_day(date, h.and_time(NaiveTime::MIN))))
    }
}
