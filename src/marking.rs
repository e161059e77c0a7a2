//! Calendar markings: what the widget paints for each day of a selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::consts::{DEFAULT_MARK_COLOR, DEFAULT_MARK_TEXT_COLOR};
use crate::{CalendarDate, prelude::*};

/// Colors used to paint selected days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkingTheme {
    pub color:      String,
    pub text_color: String,
}

impl Default for MarkingTheme {
    fn default() -> Self {
        Self {
            color:      DEFAULT_MARK_COLOR.to_owned(),
            text_color: DEFAULT_MARK_TEXT_COLOR.to_owned(),
        }
    }
}

/// Where a marked day sits inside its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PeriodPosition {
    /// A one-day period: both its start and its end.
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "within")]
    Within,
    #[display(fmt = "end")]
    End,
}

/// Display attributes of one marked day, in the widget's period-marking shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarking {
    pub selected:     bool,
    pub starting_day: bool,
    pub ending_day:   bool,
    pub color:        String,
    pub text_color:   String,
}

impl DayMarking {
    pub fn new(position: PeriodPosition, theme: &MarkingTheme) -> Self {
        let (starting_day, ending_day) = match position {
            PeriodPosition::Single => (true, true),
            PeriodPosition::Start => (true, false),
            PeriodPosition::Within => (false, false),
            PeriodPosition::End => (false, true),
        };
        Self {
            selected: true,
            starting_day,
            ending_day,
            color: theme.color.clone(),
            text_color: theme.text_color.clone(),
        }
    }

    pub const fn position(&self) -> PeriodPosition {
        match (self.starting_day, self.ending_day) {
            (true, true) => PeriodPosition::Single,
            (true, false) => PeriodPosition::Start,
            (false, true) => PeriodPosition::End,
            (false, false) => PeriodPosition::Within,
        }
    }
}

/// Marked days keyed by date, in chronological order.
///
/// Serializes as a JSON object keyed by ISO date strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedDates(BTreeMap<CalendarDate, DayMarking>);

impl MarkedDates {
    /// Marks every day of the closed interval `[start, end]`.
    ///
    /// Returns an empty map when `end` precedes `start`.
    pub fn interval(start: CalendarDate, end: CalendarDate, theme: &MarkingTheme) -> Self {
        let days = std::iter::successors(Some(start), |d| if *d < end { d.succ() } else { None })
            .take_while(|d| *d <= end);

        let marked = days
            .map(|d| {
                let position = match (d == start, d == end) {
                    (true, true) => PeriodPosition::Single,
                    (true, false) => PeriodPosition::Start,
                    (false, true) => PeriodPosition::End,
                    (false, false) => PeriodPosition::Within,
                };
                (d, DayMarking::new(position, theme))
            })
            .collect();
        Self(marked)
    }

    pub fn single(day: CalendarDate, theme: &MarkingTheme) -> Self {
        Self::interval(day, day, theme)
    }

    pub fn first(&self) -> Option<CalendarDate> {
        self.0.keys().next().copied()
    }

    pub fn last(&self) -> Option<CalendarDate> {
        self.0.keys().next_back().copied()
    }
}
