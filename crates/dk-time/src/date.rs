//! Date arithmetic and comparison functions over [`chrono`] types.
//!
//! Instants are `chrono::NaiveDateTime` — a calendar date plus time-of-day
//! in zone-less local time.  Day-level operations ignore the time-of-day
//! component.  The calendar math itself (month lengths, leap years) is
//! chrono's; this module adds the unit dispatch, the checked error surface,
//! and the range/day comparisons.

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};
use dk_core::errors::{Error, Result};
use dk_core::settings::Settings;

use crate::date_unit::DateUnit;
use crate::period::Period;

/// Return the current date.
///
/// This is the [`Settings`] evaluation date when one has been set, and the
/// local system date otherwise.
pub fn today() -> NaiveDate {
    Settings::instance()
        .evaluation_date()
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Return the calendar year of the current date (see [`today`]).
pub fn current_year() -> i32 {
    today().year()
}

/// Return a new instant offset from `date` by `amount` units of `unit`.
///
/// Negative amounts subtract.  Month and year shifts clamp the day of the
/// month to the target month's last day (Jan 31 + 1 month = Feb 28/29) and
/// preserve the time-of-day.  The input is taken by value and never mutated.
///
/// # Errors
/// Returns `Error::InvalidInput` if the result, or an intermediate unit
/// conversion, falls outside chrono's representable range.
pub fn add(date: NaiveDateTime, amount: i64, unit: DateUnit) -> Result<NaiveDateTime> {
    let out_of_range = || {
        Error::InvalidInput(format!(
            "{date} + {amount} {unit} is outside the representable date range"
        ))
    };
    match unit {
        DateUnit::Days => add_days(date, amount).ok_or_else(out_of_range),
        DateUnit::Weeks => amount
            .checked_mul(7)
            .and_then(|days| add_days(date, days))
            .ok_or_else(out_of_range),
        DateUnit::Months => add_months(date, amount).ok_or_else(out_of_range),
        DateUnit::Years => amount
            .checked_mul(12)
            .and_then(|months| add_months(date, months))
            .ok_or_else(out_of_range),
    }
}

fn add_days(date: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

fn add_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let n = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        date.checked_add_months(Months::new(n))
    } else {
        date.checked_sub_months(Months::new(n))
    }
}

/// Return `true` iff `date` is strictly after `from` and strictly before
/// `to`.  Both boundaries are exclusive: a date equal to either bound is
/// not within the range.  `from == to` is a valid (empty) range.
///
/// # Errors
/// Returns `Error::InvalidRange` if `from` is after `to`.
pub fn is_within_range(
    date: NaiveDateTime,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<bool> {
    if from > to {
        return Err(Error::InvalidRange(format!(
            "range start {from} is after range end {to}"
        )));
    }
    Ok(date > from && date < to)
}

/// Return `true` iff `date` is strictly chronologically earlier than
/// `compare`.
pub fn is_before(date: NaiveDateTime, compare: NaiveDateTime) -> bool {
    date < compare
}

/// Return `true` iff both instants fall on the same calendar day, ignoring
/// the time-of-day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

// ── Operator sugar ────────────────────────────────────────────────────────────
//
// `instant ± period` panics when the result is out of range; `add` is the
// checked form.

impl std::ops::Add<Period> for NaiveDateTime {
    type Output = NaiveDateTime;
    fn add(self, rhs: Period) -> NaiveDateTime {
        add(self, rhs.length as i64, rhs.unit).expect("date arithmetic out of range")
    }
}

impl std::ops::Sub<Period> for NaiveDateTime {
    type Output = NaiveDateTime;
    fn sub(self, rhs: Period) -> NaiveDateTime {
        self + rhs.negated()
    }
}

impl std::ops::Add<Period> for NaiveDate {
    type Output = NaiveDate;
    fn add(self, rhs: Period) -> NaiveDate {
        (self.and_time(chrono::NaiveTime::MIN) + rhs).date()
    }
}

impl std::ops::Sub<Period> for NaiveDate {
    type Output = NaiveDate;
    fn sub(self, rhs: Period) -> NaiveDate {
        self + rhs.negated()
    }
}
