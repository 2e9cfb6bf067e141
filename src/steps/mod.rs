//! Step controllers
//!
//! One controller per wizard stage. Controllers hold the transient,
//! uncommitted form state for their step, run the pure validation and
//! pricing rules, and hand results upward as returned outcome values;
//! they never reach into `BookingState` themselves. The wizard host seeds
//! each controller with the previously committed record when the customer
//! comes back to edit.

pub mod address;
pub mod checkout;
pub mod confirmation;
pub mod package;
pub mod schedule;
pub mod summary;

use std::time::{Duration, Instant};

pub use address::{AddressField, AddressOutcome, AddressStep};
pub use checkout::{
    CheckoutOutcome, CheckoutStep, MockPaymentProcessor, PaymentError, PaymentProcessor,
    PROCESSING_DELAY,
};
pub use confirmation::{confirmation_data, ConfirmationData};
pub use package::{PackageOutcome, PackageStep, PRICE_NOTICE_TTL};
pub use schedule::{pickup_date_options, DateOption, ScheduleOutcome, ScheduleStep};
pub use summary::{summary_data, SummaryData, SummaryStep};

/// A short-lived banner ("Price updated ...") a rendering surface polls.
/// It simply stops reporting its message once the TTL has passed.
#[derive(Debug, Clone)]
pub struct TransientNotice {
    message: &'static str,
    raised_at: Instant,
    ttl: Duration,
}

impl TransientNotice {
    pub(crate) fn new(message: &'static str, ttl: Duration) -> Self {
        TransientNotice {
            message,
            raised_at: Instant::now(),
            ttl,
        }
    }

    /// The message, if the notice is still live at `now`.
    pub fn message_at(&self, now: Instant) -> Option<&'static str> {
        (now.saturating_duration_since(self.raised_at) < self.ttl).then_some(self.message)
    }

    /// The message, if the notice is still live right now.
    pub fn message(&self) -> Option<&'static str> {
        self.message_at(Instant::now())
    }
}
