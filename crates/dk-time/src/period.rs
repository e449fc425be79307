//! `Period` — a time span expressed in a [`DateUnit`].

use std::str::FromStr;

use dk_core::errors::{Error, Result};

use crate::date_unit::DateUnit;

/// A time span made up of an integer length and a [`DateUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: DateUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: DateUnit) -> Self {
        Self { length, unit }
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period {
            length: self.length * rhs,
            unit: self.unit,
        }
    }
}

impl std::ops::Mul<Period> for i32 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            DateUnit::Days => "D",
            DateUnit::Weeks => "W",
            DateUnit::Months => "M",
            DateUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Parse a period literal such as `"10D"`, `"2W"`, or `"-6M"`.
    ///
    /// Unlike [`DateUnit::from_tag`], parsing is strict: an unknown unit
    /// letter is an error, not a fallback to days.
    fn from_str(s: &str) -> Result<Self> {
        let Some(unit_char) = s.chars().next_back() else {
            return Err(Error::InvalidInput("empty period literal".into()));
        };
        let unit = match unit_char {
            'D' => DateUnit::Days,
            'W' => DateUnit::Weeks,
            'M' => DateUnit::Months,
            'Y' => DateUnit::Years,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unknown unit '{unit_char}' in period literal \"{s}\""
                )))
            }
        };
        let length = s[..s.len() - unit_char.len_utf8()]
            .parse::<i32>()
            .map_err(|e| Error::InvalidInput(format!("bad period literal \"{s}\": {e}")))?;
        Ok(Period::new(length, unit))
    }
}
