//! Promotion and ban durations.
//!
//! User input such as `7d`, `12 h` or `permanent` is parsed once at the command boundary
//! into a `PromotionDuration`; records store its canonical label and end time.

use chrono::{DateTime, TimeDelta, Utc};
use fundu::{DurationParser, TimeUnit};

use crate::error::promotion::PromotionError;

const PARSER: DurationParser<'static> = DurationParser::builder()
    .time_units(&[
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
    ])
    .allow_time_unit_delimiter()
    .disable_exponent()
    .build();

const PERMANENT_KEYWORDS: [&str; 5] = ["permanent", "perm", "forever", "p", "0"];

/// Longest timed duration accepted from users, about ten years.
const MAX_DURATION_DAYS: i64 = 3650;

/// Stored label for permanent durations.
pub const PERMANENT_LABEL: &str = "permanent";

/// Length of a promotion or ban.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionDuration {
    /// Never expires; the grant or ban has no end time.
    Permanent,
    /// Expires this long after it starts.
    Timed(TimeDelta),
}

impl PromotionDuration {
    /// Parses user input into a duration.
    ///
    /// # Returns
    /// - `Ok(PromotionDuration)` - Permanent keyword or a positive number with a unit
    /// - `Err(PromotionError::InvalidDuration)` - Unit-less, zero, negative, longer than ten
    ///   years or unparsable input
    pub fn parse(input: &str) -> Result<Self, PromotionError> {
        let value = input.trim().to_lowercase();
        let invalid = || PromotionError::InvalidDuration(input.trim().to_string());

        if PERMANENT_KEYWORDS.contains(&value.as_str()) {
            return Ok(Self::Permanent);
        }

        // fundu falls back to seconds when no unit is given
        if !value.ends_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let parsed = PARSER.parse(&value).map_err(|_| invalid())?;
        let delta = TimeDelta::try_from(parsed).map_err(|_| invalid())?;

        if delta <= TimeDelta::zero() || delta > TimeDelta::days(MAX_DURATION_DAYS) {
            return Err(invalid());
        }

        Ok(Self::Timed(delta))
    }

    /// Reads back a label written by `as_stored`.
    pub fn from_stored(value: &str) -> Option<Self> {
        Self::parse(value).ok()
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent)
    }

    /// End time for something starting at `start`; `None` exactly when permanent.
    pub fn end_time(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Permanent => None,
            Self::Timed(delta) => Some(
                start
                    .checked_add_signed(*delta)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            ),
        }
    }

    /// Canonical label, using the largest unit that divides the duration exactly.
    pub fn as_stored(&self) -> String {
        let Self::Timed(delta) = self else {
            return PERMANENT_LABEL.to_string();
        };

        let seconds = delta.num_seconds();
        let units = [(86_400, "d"), (3_600, "h"), (60, "m")];

        for (size, suffix) in units {
            if seconds % size == 0 {
                return format!("{}{}", seconds / size, suffix);
            }
        }

        format!("{}s", seconds)
    }
}

impl std::fmt::Display for PromotionDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permanent => f.write_str("permanent"),
            Self::Timed(_) => f.write_str(&self.as_stored()),
        }
    }
}
