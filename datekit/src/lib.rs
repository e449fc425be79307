//! # datekit
//!
//! Date arithmetic, range checks, and pluggable holiday lookup built on
//! [chrono](https://docs.rs/chrono).
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! datekit = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use datekit::time::{add, DateUnit};
//!
//! let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let shifted = add(d, 2, DateUnit::Days).unwrap();
//! assert_eq!(shifted.date(), NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and global settings.
pub use dk_core as core;

/// Date arithmetic, periods, and comparison helpers.
pub use dk_time as time;

/// Asynchronous holiday sources and lookup functions.
pub use dk_holidays as holidays;
