//! Time bands — half-open hour intervals attached to trips and filters.
//!
//! # Semantics
//!
//! A band `[start, end)` covers `start ≤ h < end`.  Two bands overlap when
//! `a.start < b.end && b.start < a.end`; a band ending at hour 9 therefore
//! does **not** overlap one starting at hour 9.
//!
//! Trip datasets carry intervals either as two numbers or as an `"HH-HH"`
//! string (e.g. `"7-9"`); the string form parses via `FromStr`.

use std::fmt;
use std::str::FromStr;

use crate::{FlowError, FlowResult};

/// A half-open `[start_hour, end_hour)` interval.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBand {
    pub start_hour: f64,
    pub end_hour:   f64,
}

impl TimeBand {
    #[inline]
    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self { start_hour, end_hour }
    }

    /// Half-open interval overlap test.
    ///
    /// Boundary-touching bands (`[7,9)` vs `[9,10)`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &TimeBand) -> bool {
        self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }
}

impl FromStr for TimeBand {
    type Err = FlowError;

    /// Parse the `"HH-HH"` form, e.g. `"7-9"` or `"17-19"`.
    fn from_str(s: &str) -> FlowResult<Self> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| FlowError::Parse(format!("invalid time band {s:?}: expected \"HH-HH\"")))?;
        let parse_hour = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| FlowError::Parse(format!("invalid hour {part:?} in time band {s:?}")))
        };
        Ok(TimeBand::new(parse_hour(start)?, parse_hour(end)?))
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_hour, self.end_hour)
    }
}
