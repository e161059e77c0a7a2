//! Trip creation wizard: destination and dates first, then guests.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::MIN_DESTINATION_LEN;
use crate::selection::{DateRangeSelection, DateRangeSelector};
use crate::validate::validate_email;
use crate::{CalendarDate, CalendarDay};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripFormError {
    /// Destination or date range not filled in yet.
    #[error("Trip details incomplete: destination and both dates are required")]
    MissingDetails,

    #[error("Destination must have at least {min} characters, got {len}")]
    DestinationTooShort { min: usize, len: usize },

    /// Destination and dates are read-only outside the details step.
    #[error("Trip details can only be changed in the details step")]
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuestError {
    #[error("Invalid e-mail address: {0}")]
    InvalidEmail(String),

    #[error("E-mail already invited: {0}")]
    DuplicateEmail(String),
}

/// Wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormStep {
    #[default]
    TripDetails,
    AddEmail,
}

/// Owner of the trips created from this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOwner {
    pub name:  String,
    pub email: String,
}

/// Payload sent to the backend to create a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTripRequest {
    pub destination:      String,
    pub starts_at:        CalendarDate,
    pub ends_at:          CalendarDate,
    pub emails_to_invite: Vec<String>,
    pub owner_name:       String,
    pub owner_email:      String,
}

/// Outcome of pressing the wizard's main button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAdvance {
    /// Moved from the details step to the guests step.
    NextStep,
    /// Everything is filled in; the request is ready to be confirmed and sent.
    Ready(NewTripRequest),
}

/// Guests to invite, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestList(Vec<String>);

impl GuestList {
    /// Adds an address, lowercased.
    ///
    /// # Errors
    /// `GuestError::InvalidEmail` if the address does not validate,
    /// `GuestError::DuplicateEmail` if it is already on the list.
    pub fn add(&mut self, email: &str) -> Result<(), GuestError> {
        let email = email.to_lowercase();
        if !validate_email(&email) {
            return Err(GuestError::InvalidEmail(email));
        }
        if self.0.contains(&email) {
            return Err(GuestError::DuplicateEmail(email));
        }
        self.0.push(email);
        Ok(())
    }

    /// Removes an address; returns whether it was present.
    pub fn remove(&mut self, email: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e != email);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// State of the trip creation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    step:        FormStep,
    destination: String,
    dates:       DateRangeSelection,
    guests:      GuestList,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn step(&self) -> FormStep {
        self.step
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub const fn dates(&self) -> &DateRangeSelection {
        &self.dates
    }

    pub const fn guests(&self) -> &GuestList {
        &self.guests
    }

    pub const fn guests_mut(&mut self) -> &mut GuestList {
        &mut self.guests
    }

    /// # Errors
    /// `TripFormError::Locked` outside the details step.
    pub fn set_destination(&mut self, destination: impl Into<String>) -> Result<(), TripFormError> {
        self.ensure_editable()?;
        self.destination = destination.into();
        Ok(())
    }

    /// Folds a calendar tap into the trip dates.
    ///
    /// # Errors
    /// `TripFormError::Locked` outside the details step.
    pub fn select_day(&mut self, selector: &DateRangeSelector, day: &CalendarDay) -> Result<(), TripFormError> {
        self.ensure_editable()?;
        self.dates = selector.recompute(&self.dates, day);
        Ok(())
    }

    /// Returns to the details step so destination and dates can be edited.
    pub fn edit_details(&mut self) {
        if self.step != FormStep::TripDetails {
            debug!("returning to trip details step");
            self.step = FormStep::TripDetails;
        }
    }

    /// Validates the details and moves the wizard forward.
    ///
    /// # Errors
    /// `MissingDetails` when the destination is blank or the range is not complete,
    /// `DestinationTooShort` when the destination is under the minimum length.
    pub fn advance(&mut self, owner: &TripOwner) -> Result<FormAdvance, TripFormError> {
        let (starts_at, ends_at) = self.validate_details().inspect_err(|err| {
            warn!(step = ?self.step, %err, "trip form rejected");
        })?;

        match self.step {
            FormStep::TripDetails => {
                debug!("moving to guests step");
                self.step = FormStep::AddEmail;
                Ok(FormAdvance::NextStep)
            },
            FormStep::AddEmail => Ok(FormAdvance::Ready(NewTripRequest {
                destination: self.destination.clone(),
                starts_at,
                ends_at,
                emails_to_invite: self.guests.iter().map(str::to_owned).collect(),
                owner_name: owner.name.clone(),
                owner_email: owner.email.clone(),
            })),
        }
    }

    fn validate_details(&self) -> Result<(CalendarDate, CalendarDate), TripFormError> {
        let bounds = self.dates.bounds();
        let Some(bounds) = bounds.filter(|_| !self.destination.trim().is_empty()) else {
            return Err(TripFormError::MissingDetails);
        };
        let len = self.destination.chars().count();
        if len < MIN_DESTINATION_LEN {
            return Err(TripFormError::DestinationTooShort {
                min: MIN_DESTINATION_LEN,
                len,
            });
        }
        Ok(bounds)
    }

    const fn ensure_editable(&self) -> Result<(), TripFormError> {
        match self.step {
            FormStep::TripDetails => Ok(()),
            FormStep::AddEmail => Err(TripFormError::Locked),
        }
    }
}
