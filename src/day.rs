use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{CalendarDate, DateError};

/// A day tapped on the calendar widget.
///
/// Carries the date itself plus the metadata the widget reports with every
/// press. On the wire it has the widget's own shape:
/// `{"dateString": "2024-05-12", "year": 2024, "month": 5, "day": 12, "timestamp": ...}`.
/// Only `dateString` is trusted when deserializing; the other fields are
/// rebuilt from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateData", into = "DateData")]
pub struct CalendarDay {
    date: CalendarDate,
}

impl CalendarDay {
    pub const fn new(date: CalendarDate) -> Self {
        Self { date }
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// ISO key used by the widget (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    pub fn timestamp(&self) -> i64 {
        self.date.timestamp_millis()
    }
}

impl From<CalendarDate> for CalendarDay {
    fn from(date: CalendarDate) -> Self {
        Self::new(date)
    }
}

impl FromStr for CalendarDay {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateData {
    date_string: String,
    #[serde(default)]
    year:        u16,
    #[serde(default)]
    month:       u8,
    #[serde(default)]
    day:         u8,
    #[serde(default)]
    timestamp:   i64,
}

impl TryFrom<DateData> for CalendarDay {
    type Error = DateError;

    fn try_from(data: DateData) -> Result<Self, Self::Error> {
        data.date_string.parse()
    }
}

impl From<CalendarDay> for DateData {
    fn from(day: CalendarDay) -> Self {
        Self {
            date_string: day.date_string(),
            year:        day.date.year(),
            month:       day.date.month(),
            day:         day.date.day(),
            timestamp:   day.timestamp(),
        }
    }
}
