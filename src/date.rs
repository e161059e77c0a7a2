use crate::consts::{
    DATE_SEPARATOR, DECEMBER, JANUARY, MAX_MONTH, MAX_YEAR, MILLIS_PER_DAY, MIN_DAY,
    SHORT_FORM_SEPARATOR, UNIX_EPOCH_DAY_NUMBER,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use std::str::FromStr;

/// A single Gregorian calendar day.
///
/// Ordering is chronological. The textual form is ISO 8601 (`YYYY-MM-DD`),
/// which is also what calendar widgets use to key their marked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    // Field order matters: the derived `Ord` compares year, then month, then day.
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers, validating every component.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Year::new(year)?, Month::new(month)?, day)
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The following calendar day, or `None` past the last day of `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year(), self.month(), self.day())?;
        Self::from_ymd(year, month, day).ok()
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// Milliseconds since the Unix epoch at UTC midnight, the way calendar
    /// widgets timestamp a tapped day.
    pub fn timestamp_millis(&self) -> i64 {
        self.days_since_epoch() * MILLIS_PER_DAY
    }

    /// Number of days in the closed interval `[self, other]`; zero if `other` is earlier.
    pub fn days_through(&self, other: &Self) -> u32 {
        let span = other.days_since_epoch() - self.days_since_epoch();
        u32::try_from(span + 1).unwrap_or(0)
    }

    /// Short display form used in range summaries: `DD/MM`.
    pub fn short_form(&self) -> String {
        format!("{}{SHORT_FORM_SEPARATOR}{}", self.day, self.month)
    }
}

// --- calendar arithmetic ---
fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        return Some((year, month, day + 1));
    }
    if month < DECEMBER {
        return Some((year, month + 1, MIN_DAY));
    }
    // roll into the next year, unless that would pass MAX_YEAR
    (year < MAX_YEAR).then_some((year + 1, JANUARY, MIN_DAY))
}

/// Day count from civil date, shifted so March starts the computational year
/// and leap days fall at its end.
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_index = (month + 9) % 12;
    let day_of_year = (153 * month_index + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - UNIX_EPOCH_DAY_NUMBER
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses a strict ISO `YYYY-MM-DD` date; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = Year::new(parse_component(year)?)?;
        let month = Month::new(parse_component(month)?)?;
        Self::new(year, month, parse_component(day)?)
    }
}

/// Parses one numeric date component, rejecting signs and whitespace.
fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso_date() {
        let d = "2024-05-12".parse::<CalendarDate>().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 5, 12));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(" 2024-05-12 ".parse::<CalendarDate>(), Ok(date(2024, 5, 12)));
    }

    #[test]
    fn test_parse_rejects_partial_dates() {
        for input in ["2024", "2024-05", "2024-05-12-01", "05/12/2024"] {
            assert!(
                matches!(input.parse::<CalendarDate>(), Err(DateError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("   ".parse::<CalendarDate>(), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_bad_tokens() {
        for input in ["202A-05-12", "2024-XX-12", "2024-05-1X", "2024-+5-12", "2024--12"] {
            assert!(
                matches!(input.parse::<CalendarDate>(), Err(DateError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range_components() {
        assert_eq!("0000-05-12".parse::<CalendarDate>(), Err(DateError::InvalidYear(0)));
        assert_eq!("2024-13-01".parse::<CalendarDate>(), Err(DateError::InvalidMonth(13)));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!("2024-02-29".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(date(2024, 5, 1).to_string(), "2024-05-01");
        assert_eq!(date(33, 12, 31).to_string(), "0033-12-31");
    }

    #[test]
    fn test_short_form() {
        assert_eq!(date(2024, 5, 12).short_form(), "12/05");
        assert_eq!(date(2024, 12, 1).short_form(), "01/12");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2024, 5, 1) < date(2024, 5, 12));
        assert!(date(2024, 4, 30) < date(2024, 5, 1));
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert_eq!(date(2024, 5, 12), date(2024, 5, 12));
    }

    #[test]
    fn test_succ_rolls_over() {
        assert_eq!(date(2024, 5, 12).succ(), Some(date(2024, 5, 13)));
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).succ(), Some(date(2023, 3, 1)));
        assert_eq!(date(2024, 12, 31).succ(), Some(date(2025, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(date(1970, 1, 1).days_since_epoch(), 0);
        assert_eq!(date(1969, 12, 31).days_since_epoch(), -1);
        assert_eq!(date(2000, 3, 1).days_since_epoch(), 11_017);
        assert_eq!(date(2024, 5, 12).days_since_epoch(), 19_855);
    }

    #[test]
    fn test_timestamp_millis() {
        assert_eq!(date(2024, 5, 12).timestamp_millis(), 1_715_472_000_000);
    }

    #[test]
    fn test_days_through() {
        assert_eq!(date(2024, 5, 12).days_through(&date(2024, 5, 18)), 7);
        assert_eq!(date(2024, 5, 12).days_through(&date(2024, 5, 12)), 1);
        assert_eq!(date(2024, 2, 28).days_through(&date(2024, 3, 1)), 3);
        assert_eq!(date(2024, 5, 18).days_through(&date(2024, 5, 12)), 0);
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 5, 12);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-05-12""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }
}
