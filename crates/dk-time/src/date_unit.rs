//! `DateUnit` — units of time used in date arithmetic and [`Period`].
//!
//! [`Period`]: crate::period::Period

/// A unit of time.
///
/// `Days` is the default granularity: [`DateUnit::default()`] returns it,
/// and [`DateUnit::from_tag`] falls back to it for unrecognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateUnit {
    /// Calendar days.
    #[default]
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl DateUnit {
    /// Map a textual unit tag (`"days"`, `"weeks"`, `"months"`, `"years"`,
    /// case-insensitive) to a `DateUnit`.
    ///
    /// Unrecognized tags map to `Days`.  This leniency is carried over from
    /// the callers this library replaced, where an unknown unit silently
    /// meant day-granularity addition.
    // TODO: confirm with the product owner whether unknown tags should
    // become an error instead of falling back to Days.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("weeks") {
            DateUnit::Weeks
        } else if tag.eq_ignore_ascii_case("months") {
            DateUnit::Months
        } else if tag.eq_ignore_ascii_case("years") {
            DateUnit::Years
        } else {
            DateUnit::Days
        }
    }
}

impl std::fmt::Display for DateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateUnit::Days => write!(f, "Day(s)"),
            DateUnit::Weeks => write!(f, "Week(s)"),
            DateUnit::Months => write!(f, "Month(s)"),
            DateUnit::Years => write!(f, "Year(s)"),
        }
    }
}
