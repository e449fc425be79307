//! Mock holiday source with simulated network latency.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use dk_core::errors::{Error, Result};
use tracing::debug;

use crate::source::HolidaySource;

const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// A holiday source returning a fixed three-date set (January 1,
/// December 25, December 31) for any year, delivered after an artificial
/// delay standing in for a network round-trip.
///
/// The fetch never fails for representable years.
pub struct MockHolidaySource {
    delay: Duration,
}

impl MockHolidaySource {
    /// Create a mock source with the default 100 ms fetch delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Create a mock source with a custom fetch delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockHolidaySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HolidaySource for MockHolidaySource {
    async fn holidays(&self, year: i32) -> Result<Vec<NaiveDate>> {
        debug!(year, delay_ms = self.delay.as_millis() as u64, "fetching holidays");
        tokio::time::sleep(self.delay).await;

        let date = |month, day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| Error::InvalidInput(format!("year {year} is out of range")))
        };
        let holidays = vec![date(1, 1)?, date(12, 25)?, date(12, 31)?];
        debug!(year, count = holidays.len(), "holidays fetched");
        Ok(holidays)
    }
}
