//! Integration tests for range membership, ordering, day-level equality,
//! and the current-date lookup.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use dk_core::errors::Error;
use dk_core::settings::Settings;
use dk_time::{current_year, is_before, is_same_day, is_within_range, today};

fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    datetime(y, m, d, 0, 0)
}

// ─── is_within_range ──────────────────────────────────────────────────────────

#[test]
fn within_range_strictly_between() {
    let from = midnight(2026, 1, 1);
    let to = midnight(2026, 12, 31);
    assert!(is_within_range(midnight(2026, 6, 15), from, to).unwrap());
    assert!(!is_within_range(midnight(2025, 6, 15), from, to).unwrap());
    assert!(!is_within_range(midnight(2027, 6, 15), from, to).unwrap());
}

#[test]
fn within_range_boundaries_are_exclusive() {
    let from = midnight(2026, 1, 1);
    let to = midnight(2026, 12, 31);
    assert!(!is_within_range(from, from, to).unwrap());
    assert!(!is_within_range(to, from, to).unwrap());
}

#[test]
fn within_range_empty_range_is_valid() {
    let bound = midnight(2026, 1, 1);
    assert!(!is_within_range(bound, bound, bound).unwrap());
}

#[test]
fn within_range_rejects_misordered_bounds() {
    let result = is_within_range(
        midnight(2026, 6, 15),
        midnight(2026, 12, 31),
        midnight(2026, 1, 1),
    );
    assert!(matches!(result, Err(Error::InvalidRange(_))));
}

// ─── is_before / is_same_day ──────────────────────────────────────────────────

#[test]
fn before_is_strict() {
    let d = midnight(2026, 6, 15);
    assert!(is_before(d, midnight(2026, 6, 16)));
    assert!(is_before(d, datetime(2026, 6, 15, 0, 1)));
    assert!(!is_before(d, d));
    assert!(!is_before(midnight(2026, 6, 16), d));
}

#[test]
fn same_day_is_reflexive() {
    let d = datetime(2026, 6, 15, 13, 45);
    assert!(is_same_day(d, d));
}

#[test]
fn same_day_ignores_time_of_day() {
    assert!(is_same_day(
        datetime(2026, 6, 15, 0, 0),
        datetime(2026, 6, 15, 23, 59)
    ));
    assert!(!is_same_day(
        datetime(2026, 6, 15, 23, 59),
        datetime(2026, 6, 16, 0, 0)
    ));
}

// ─── today / current_year ─────────────────────────────────────────────────────

#[test]
fn current_year_honors_the_evaluation_date() {
    let settings = Settings::instance();
    settings.set_evaluation_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());

    assert_eq!(today(), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    assert_eq!(current_year(), 1999);

    settings.reset_evaluation_date();
    assert_eq!(current_year(), chrono::Local::now().date_naive().year());
}
