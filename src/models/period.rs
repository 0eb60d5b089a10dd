//! Calendar granularity used to bound the dashboard totals

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar unit: the current day or the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Month,
}

impl Period {
    pub const ALL: [Period; 2] = [Self::Day, Self::Month];

    /// Is `date` in the same calendar day (or month and year) as `now`?
    ///
    /// The comparison happens in `now`'s time zone, so a record made late in
    /// the evening local time still counts for that local day.
    pub fn contains<Tz: TimeZone>(&self, date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let local = date.with_timezone(&now.timezone()).date_naive();
        let today = now.date_naive();

        match self {
            Self::Day => local == today,
            Self::Month => local.year() == today.year() && local.month() == today.month(),
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" | "d" => Some(Self::Day),
            "month" | "m" => Some(Self::Month),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::Month => write!(f, "Month"),
        }
    }
}
