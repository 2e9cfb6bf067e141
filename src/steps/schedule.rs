//! Schedule step controller
//!
//! Offers exactly two pickup dates - tomorrow and the day after, derived
//! from the wall-clock date the step was opened with - plus the fixed
//! time-slot catalog. The evening slot is permanently closed and cannot
//! be selected. Selecting a date or slot clears that field's recorded
//! error; advancing needs both selections.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use shyp_types::{time_slot, ScheduleDetails, TimeSlot, TIME_SLOTS};

use crate::error::BookingError;
use crate::validation::FieldError;

/// One offerable pickup date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOption {
    pub date: NaiveDate,
    /// `FASTEST` on tomorrow for express bookings.
    pub tag: Option<&'static str>,
}

/// The two offerable dates, tomorrow first.
pub fn pickup_date_options(today: NaiveDate, is_express: bool) -> [DateOption; 2] {
    [
        DateOption {
            date: today + Days::new(1),
            tag: is_express.then_some("FASTEST"),
        },
        DateOption {
            date: today + Days::new(2),
            tag: None,
        },
    ]
}

/// What pressing continue on the schedule step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// Missing selections; nothing travels upward.
    Invalid(Vec<FieldError>),
    Submitted(ScheduleDetails),
}

#[derive(Debug)]
pub struct ScheduleStep {
    options: [DateOption; 2],
    is_express: bool,
    selected_date: Option<NaiveDate>,
    selected_slot: Option<&'static TimeSlot>,
    errors: HashMap<String, String>,
}

impl ScheduleStep {
    /// Start the step. `today` is the wall-clock date at render time,
    /// passed in so tests can pin it. A previously committed selection is
    /// restored when it is still offerable; a stale date falls back to
    /// the default (tomorrow preselected, no slot).
    pub fn new(initial: Option<&ScheduleDetails>, is_express: bool, today: NaiveDate) -> Self {
        let options = pickup_date_options(today, is_express);

        let selected_date = initial
            .map(|s| s.pickup_date)
            .filter(|date| options.iter().any(|o| o.date == *date))
            .or(Some(options[0].date));
        let selected_slot = initial.and_then(|s| {
            TIME_SLOTS
                .iter()
                .find(|slot| slot.available && slot.label == s.pickup_time)
        });

        ScheduleStep {
            options,
            is_express,
            selected_date,
            selected_slot,
            errors: HashMap::new(),
        }
    }

    pub fn date_options(&self) -> &[DateOption; 2] {
        &self.options
    }

    pub fn time_slots(&self) -> &'static [TimeSlot; 4] {
        &TIME_SLOTS
    }

    pub fn is_express(&self) -> bool {
        self.is_express
    }

    /// Express bookings get same-day messaging once a slot is picked.
    pub fn same_day_promise(&self) -> bool {
        self.is_express && self.selected_slot.is_some()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<&'static TimeSlot> {
        self.selected_slot
    }

    /// Recorded inline errors, keyed by field.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Select one of the offered dates; clears the date error.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if !self.options.iter().any(|option| option.date == date) {
            return Err(BookingError::DateNotOffered(date));
        }
        self.selected_date = Some(date);
        self.errors.remove("date");
        Ok(())
    }

    /// Select a slot by catalog id; the closed evening slot is rejected
    /// and the current selection stays as it was.
    pub fn select_time_slot(&mut self, id: &str) -> Result<(), BookingError> {
        let slot =
            time_slot(id).ok_or_else(|| BookingError::UnknownTimeSlot(id.to_string()))?;
        if !slot.available {
            return Err(BookingError::SlotUnavailable(slot.label.to_string()));
        }
        self.selected_slot = Some(slot);
        self.errors.remove("time");
        Ok(())
    }

    /// Mirror of the continue-button predicate.
    pub fn can_submit(&self) -> bool {
        self.selected_date.is_some() && self.selected_slot.is_some()
    }

    pub fn submit(&mut self) -> ScheduleOutcome {
        let (Some(date), Some(slot)) = (self.selected_date, self.selected_slot) else {
            let mut errors = Vec::new();
            if self.selected_date.is_none() {
                errors.push(FieldError::new("date", "Please select a pickup date"));
            }
            if self.selected_slot.is_none() {
                errors.push(FieldError::new("time", "Please select a time slot"));
            }
            for error in &errors {
                self.errors
                    .insert(error.field.clone(), error.message.clone());
            }
            return ScheduleOutcome::Invalid(errors);
        };

        ScheduleOutcome::Submitted(ScheduleDetails {
            pickup_date: date,
            pickup_time: slot.label.to_string(),
        })
    }
}
