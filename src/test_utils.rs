//! Fixture builders shared by the unit tests.

use crate::{CalendarDate, CalendarDay, DateRangeSelection, recompute};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn tap(iso: &str) -> CalendarDay {
    iso.parse().expect("test day must be valid ISO")
}

/// Applies taps in order to an empty selection with the default selector.
pub fn select(taps: &[&str]) -> DateRangeSelection {
    taps.iter()
        .fold(DateRangeSelection::new(), |selection, t| recompute(&selection, &tap(t)))
}

/// Routes tracing output through the test harness for the current test.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trip_dates=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
