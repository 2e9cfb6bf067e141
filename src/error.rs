//! Error types for the booking core
//!
//! Per-field form problems travel as [`crate::validation::FieldError`]
//! lists inside step outcomes, so a surface can pin each message to its
//! input. `BookingError` covers everything else: host-level misuse,
//! unofferable selections, and the payment seam.

use chrono::NaiveDate;
use thiserror::Error;

use crate::steps::checkout::PaymentError;

pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("cannot go back past the first step")]
    AtFirstStep,

    #[error("step {0} is not a wizard step")]
    UnknownStep(u8),

    #[error("{0} has not been provided yet")]
    IncompleteBooking(&'static str),

    #[error("{0} is not an offered pickup date")]
    DateNotOffered(NaiveDate),

    #[error("'{0}' is not a pickup time slot")]
    UnknownTimeSlot(String),

    #[error("time slot '{0}' is not available")]
    SlotUnavailable(String),

    #[error("checkout requires a committed price")]
    MissingPricing,

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
