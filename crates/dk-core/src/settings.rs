//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date** — the date treated as "today"
//! by `dk_time::today()` and `dk_time::current_year()`.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Each test that changes the evaluation
//! date should restore it when done.

use std::sync::{Mutex, OnceLock};

use chrono::NaiveDate;

/// Process-wide settings used by the datekit library.
///
/// Currently the only setting is the **evaluation date**.  When set, it
/// overrides the system clock as the source of "today"; when unset, the
/// local system date is used.
pub struct Settings {
    evaluation_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the current evaluation date.
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date(&self) -> Option<NaiveDate> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date.
    pub fn set_evaluation_date(&self, date: NaiveDate) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(date);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}
