//! Table-backed holiday source.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use dk_core::errors::Result;

use crate::source::HolidaySource;

/// A holiday source backed by a per-year table, answering immediately with
/// no simulated latency.
///
/// This is the substitutable "real data" implementation of the
/// [`HolidaySource`] seam: load it from whatever upstream data you have and
/// pass it wherever a source is expected.  Years absent from the table have
/// no holidays.
#[derive(Debug, Default)]
pub struct StaticHolidaySource {
    table: HashMap<i32, Vec<NaiveDate>>,
}

impl StaticHolidaySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the holiday dates for `year`, replacing any existing entry.
    /// The dates are stored sorted.
    pub fn with_year(mut self, year: i32, mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        self.table.insert(year, dates);
        self
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn holidays(&self, year: i32) -> Result<Vec<NaiveDate>> {
        Ok(self.table.get(&year).cloned().unwrap_or_default())
    }
}
