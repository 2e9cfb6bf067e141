//! Wizard host
//!
//! Owns the one [`BookingState`] per session. Step controllers and the
//! rendering surface talk to it through [`WizardEvent`]s; [`BookingWizard::apply`]
//! is the single entry point that maps events onto reducer actions, so
//! step logic never holds a reference into the state it is updating. The
//! host is also where the booking reference is issued - checkout hands up
//! contact details, nothing more.

use chrono::NaiveDate;

use shyp_types::{
    DeliveryDetails, PackageDetails, PricingBreakdown, ScheduleDetails, UserDetails,
};

use crate::error::{BookingError, BookingResult};
use crate::reference;
use crate::state::{reduce, BookingAction, BookingState, FIRST_STEP, LAST_STEP};
use crate::steps::address::AddressStep;
use crate::steps::checkout::{CheckoutOutcome, CheckoutStep, PaymentProcessor};
use crate::steps::package::PackageStep;
use crate::steps::schedule::ScheduleStep;
use crate::steps::summary;
use crate::validation::FieldError;

/// Messages from the steps and the rendering surface to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Address step finished. With `serviceable: false` the details are
    /// recorded but the wizard stays put.
    AddressSubmitted {
        details: DeliveryDetails,
        serviceable: bool,
    },
    PackageSubmitted {
        package: PackageDetails,
        pricing: PricingBreakdown,
    },
    ScheduleSubmitted { schedule: ScheduleDetails },
    SummaryConfirmed,
    /// Contact details committed; the host issues the reference and
    /// completes the booking.
    CheckoutCompleted { user: UserDetails },
    BackRequested,
    EditRequested { step: u8 },
    /// Start over after a completed booking.
    NewBookingRequested,
}

/// What a full checkout attempt through the host produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutResult {
    /// Reference issued; the state is on the confirmation step.
    Booked,
    /// Form rejected; nothing was processed or committed.
    Rejected(Vec<FieldError>),
}

#[derive(Debug, Default)]
pub struct BookingWizard {
    state: BookingState,
}

impl BookingWizard {
    pub fn new() -> Self {
        BookingWizard {
            state: BookingState::initial(),
        }
    }

    /// Current immutable snapshot.
    pub fn state(&self) -> &BookingState {
        &self.state
    }

    fn dispatch(&mut self, action: BookingAction) {
        self.state = reduce(&self.state, &action);
    }

    fn advance(&mut self) {
        let next = (self.state.current_step + 1).min(LAST_STEP);
        self.dispatch(BookingAction::SetStep(next));
    }

    /// Apply one event; returns the new snapshot.
    pub fn apply(&mut self, event: WizardEvent) -> BookingResult<&BookingState> {
        tracing::debug!(step = self.state.current_step, ?event, "applying wizard event");
        match event {
            WizardEvent::AddressSubmitted {
                details,
                serviceable,
            } => {
                self.dispatch(BookingAction::SetDeliveryDetails(details));
                self.dispatch(BookingAction::SetServiceability(serviceable));
                if serviceable {
                    self.advance();
                }
            }
            WizardEvent::PackageSubmitted { package, pricing } => {
                self.dispatch(BookingAction::SetPackageDetails(package));
                self.dispatch(BookingAction::SetPricing(pricing));
                self.advance();
            }
            WizardEvent::ScheduleSubmitted { schedule } => {
                self.dispatch(BookingAction::SetScheduleDetails(schedule));
                self.advance();
            }
            WizardEvent::SummaryConfirmed => {
                summary::summary_data(&self.state)?;
                self.advance();
            }
            WizardEvent::CheckoutCompleted { user } => {
                self.dispatch(BookingAction::SetUserDetails(user));
                let booking_reference = reference::booking_reference();
                tracing::info!(%booking_reference, "booking completed");
                self.dispatch(BookingAction::CompleteBooking(booking_reference));
            }
            WizardEvent::BackRequested => {
                if self.state.current_step <= FIRST_STEP {
                    return Err(BookingError::AtFirstStep);
                }
                self.dispatch(BookingAction::SetStep(self.state.current_step - 1));
            }
            WizardEvent::EditRequested { step } => {
                if !(FIRST_STEP..=LAST_STEP).contains(&step) {
                    return Err(BookingError::UnknownStep(step));
                }
                self.dispatch(BookingAction::SetStep(step));
            }
            WizardEvent::NewBookingRequested => self.dispatch(BookingAction::Reset),
        }
        Ok(&self.state)
    }

    /// Run checkout end to end: validate, hold the processing pause with
    /// the loading flag up, then commit and complete. The reference lands
    /// in the returned snapshot's `booking_reference`.
    pub async fn submit_checkout<P: PaymentProcessor + ?Sized>(
        &mut self,
        checkout: &mut CheckoutStep,
        processor: &P,
    ) -> BookingResult<CheckoutResult> {
        let total = self
            .state
            .pricing
            .map(|pricing| pricing.total)
            .ok_or(BookingError::MissingPricing)?;

        self.dispatch(BookingAction::SetLoading(true));
        let outcome = checkout.submit(total, processor).await;
        self.dispatch(BookingAction::SetLoading(false));

        match outcome? {
            CheckoutOutcome::Submitted(user) => {
                self.apply(WizardEvent::CheckoutCompleted { user })?;
                Ok(CheckoutResult::Booked)
            }
            CheckoutOutcome::Invalid(errors) => Ok(CheckoutResult::Rejected(errors)),
        }
    }

    // ------------------------------------------------------------------
    // Step controller factories, seeded from the committed state the way
    // the surface mounts each step.
    // ------------------------------------------------------------------

    pub fn address_step(&self) -> AddressStep {
        AddressStep::new(self.state.delivery_details.as_ref())
    }

    /// Needs committed delivery details for the delivery type.
    pub fn package_step(&self) -> BookingResult<PackageStep> {
        let delivery = self
            .state
            .delivery_details
            .as_ref()
            .ok_or(BookingError::IncompleteBooking("delivery details"))?;
        Ok(PackageStep::new(
            self.state.package_details.as_ref(),
            delivery.delivery_type,
        ))
    }

    /// Needs committed delivery details for the express messaging;
    /// `today` is the wall-clock date at render time.
    pub fn schedule_step(&self, today: NaiveDate) -> BookingResult<ScheduleStep> {
        let delivery = self
            .state
            .delivery_details
            .as_ref()
            .ok_or(BookingError::IncompleteBooking("delivery details"))?;
        Ok(ScheduleStep::new(
            self.state.schedule_details.as_ref(),
            delivery.delivery_type.is_express(),
            today,
        ))
    }

    pub fn checkout_step(&self) -> CheckoutStep {
        CheckoutStep::new(self.state.user_details.as_ref())
    }
}
