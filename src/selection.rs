//! Date-range selection driven by calendar taps.
//!
//! A selection moves through three phases: nothing picked, a lone start day,
//! and a complete `[start, end]` range. Each tap is folded into the current
//! selection by [`DateRangeSelector::recompute`], which never fails and never
//! mutates its input.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::consts::DEFAULT_RANGE_CONNECTOR;
use crate::marking::{MarkedDates, MarkingTheme};
use crate::{CalendarDate, CalendarDay};

/// Selector settings supplied by the host screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub theme:     MarkingTheme,
    /// Word placed between the bounds of the formatted range (`12/05 a 18/05`).
    pub connector: String,
    /// Earliest day the calendar should offer. Not enforced by `recompute`.
    pub min_date:  Option<CalendarDate>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            theme:     MarkingTheme::default(),
            connector: DEFAULT_RANGE_CONNECTOR.to_owned(),
            min_date:  None,
        }
    }
}

/// Phase of a range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangePhase {
    #[default]
    Empty,
    /// A start day is picked and the next tap will close the range.
    StartOnly { start: CalendarDay },
    /// Both bounds are picked; `start <= end` always holds.
    Complete { start: CalendarDay, end: CalendarDay },
}

impl RangePhase {
    /// Whether the next tap begins a brand new selection.
    pub const fn accepts_fresh_start(&self) -> bool {
        matches!(self, Self::Empty | Self::Complete { .. })
    }
}

/// The selection state held by the screen between taps.
///
/// Only [`DateRangeSelector`] builds non-empty selections, so the marked days
/// and summary text always agree with the phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    phase:                RangePhase,
    marked_dates:         MarkedDates,
    formatted_range_text: Option<String>,
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn phase(&self) -> &RangePhase {
        &self.phase
    }

    pub const fn start_date(&self) -> Option<CalendarDay> {
        match self.phase {
            RangePhase::Empty => None,
            RangePhase::StartOnly { start } | RangePhase::Complete { start, .. } => Some(start),
        }
    }

    pub const fn end_date(&self) -> Option<CalendarDay> {
        match self.phase {
            RangePhase::Complete { end, .. } => Some(end),
            RangePhase::Empty | RangePhase::StartOnly { .. } => None,
        }
    }

    /// Both bounds as dates, once the range is complete.
    pub const fn bounds(&self) -> Option<(CalendarDate, CalendarDate)> {
        match self.phase {
            RangePhase::Complete { start, end } => Some((start.date(), end.date())),
            RangePhase::Empty | RangePhase::StartOnly { .. } => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, RangePhase::Complete { .. })
    }

    pub const fn marked_dates(&self) -> &MarkedDates {
        &self.marked_dates
    }

    pub fn formatted_range_text(&self) -> Option<&str> {
        self.formatted_range_text.as_deref()
    }
}

impl Serialize for DateRangeSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DateRangeSelection", 4)?;
        state.serialize_field("startDate", &self.start_date())?;
        state.serialize_field("endDate", &self.end_date())?;
        state.serialize_field("markedDates", &self.marked_dates)?;
        state.serialize_field("formattedRangeText", &self.formatted_range_text)?;
        state.end()
    }
}

/// Folds calendar taps into a [`DateRangeSelection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSelector {
    config: SelectorConfig,
}

impl DateRangeSelector {
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Computes the selection that results from tapping `tapped`.
    ///
    /// - With nothing picked, or a complete range, the tap starts over.
    /// - With a lone start, an earlier tap becomes the start and the old start
    ///   becomes the end; a tap on the start itself closes a one-day range;
    ///   a later tap becomes the end.
    pub fn recompute(&self, current: &DateRangeSelection, tapped: &CalendarDay) -> DateRangeSelection {
        let phase = match current.phase {
            RangePhase::Empty | RangePhase::Complete { .. } => {
                debug!(day = %tapped.date(), "starting new range selection");
                RangePhase::StartOnly { start: *tapped }
            },
            RangePhase::StartOnly { start } => {
                let (start, end) = match tapped.date().cmp(&start.date()) {
                    Ordering::Less => (*tapped, start),
                    Ordering::Equal => (start, start),
                    Ordering::Greater => (start, *tapped),
                };
                debug!(start = %start.date(), end = %end.date(), "range selection complete");
                RangePhase::Complete { start, end }
            },
        };
        self.build(phase)
    }

    /// Whether `day` is on or after the configured minimum date.
    pub fn is_selectable(&self, day: &CalendarDay) -> bool {
        self.config.min_date.is_none_or(|min| day.date() >= min)
    }

    /// Summary text for a complete range, e.g. `12/05 a 18/05`.
    pub fn format_range(&self, start: CalendarDate, end: CalendarDate) -> String {
        format!("{} {} {}", start.short_form(), self.config.connector, end.short_form())
    }

    fn build(&self, phase: RangePhase) -> DateRangeSelection {
        let theme = &self.config.theme;
        let (marked_dates, formatted_range_text) = match phase {
            RangePhase::Empty => (MarkedDates::default(), None),
            RangePhase::StartOnly { start } => (MarkedDates::single(start.date(), theme), None),
            RangePhase::Complete { start, end } => {
                let (start, end) = (start.date(), end.date());
                let marked = MarkedDates::interval(start, end, theme);
                trace!(%start, %end, days = marked.len(), "marked range");
                (marked, Some(self.format_range(start, end)))
            },
        };
        DateRangeSelection {
            phase,
            marked_dates,
            formatted_range_text,
        }
    }
}

/// [`DateRangeSelector::recompute`] with the default configuration.
pub fn recompute(current: &DateRangeSelection, tapped: &CalendarDay) -> DateRangeSelection {
    DateRangeSelector::default().recompute(current, tapped)
}
