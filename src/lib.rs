mod consts;
mod date;
mod day;
mod link;
mod marking;
mod prelude;
mod selection;
mod trip;
mod types;
mod validate;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use date::{CalendarDate, DateError};
pub use day::CalendarDay;
pub use link::{CreateLinkRequest, LinkDraft, LinkError};
pub use marking::{DayMarking, MarkedDates, MarkingTheme, PeriodPosition};
pub use selection::{DateRangeSelection, DateRangeSelector, RangePhase, SelectorConfig, recompute};
pub use trip::{
    FormAdvance, FormStep, GuestError, GuestList, NewTripRequest, TripForm, TripFormError, TripOwner,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{validate_email, validate_url};
