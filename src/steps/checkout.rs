//! Checkout step controller
//!
//! Contact-form validation plus the simulated payment pause. Validation
//! runs before anything else and a failure commits nothing. A passing
//! submit holds the step in a processing state - the surface locks its
//! inputs off the flag - awaits the fixed pause, then hands the contact
//! details upward. Issuing the booking reference is the wizard host's
//! job, never this step's.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use shyp_types::UserDetails;
use thiserror::Error;

use crate::validation::{validate_contact, FieldError};

/// Fixed simulated processing pause.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Payment boundary. The demo ships [`MockPaymentProcessor`], which always
/// succeeds after the pause; a real processor would return declines here.
#[async_trait]
pub trait PaymentProcessor {
    async fn process(&self, amount: u32) -> Result<(), PaymentError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment declined: {reason}")]
    Declined { reason: String },
}

/// Always succeeds after [`PROCESSING_DELAY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentProcessor;

#[async_trait]
impl PaymentProcessor for MockPaymentProcessor {
    async fn process(&self, amount: u32) -> Result<(), PaymentError> {
        tracing::debug!(amount, "simulating payment capture");
        tokio::time::sleep(PROCESSING_DELAY).await;
        Ok(())
    }
}

/// What submitting the checkout form produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// One or more fields rejected; nothing was processed.
    Invalid(Vec<FieldError>),
    /// Contact details ready to commit; the host issues the reference.
    Submitted(UserDetails),
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutStep {
    name: String,
    phone: String,
    email: String,
    errors: HashMap<String, String>,
    processing: bool,
}

impl CheckoutStep {
    /// Start the step, seeded with previously committed contact details.
    pub fn new(initial: Option<&UserDetails>) -> Self {
        match initial {
            Some(user) => CheckoutStep {
                name: user.name.clone(),
                phone: user.phone.clone(),
                email: user.email.clone(),
                ..CheckoutStep::default()
            },
            None => CheckoutStep::default(),
        }
    }

    /// Digits only, capped at ten, as the phone input enforces.
    pub fn sanitize_phone(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).take(10).collect()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.remove("name");
    }

    /// Stores the sanitized form of `raw`.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = Self::sanitize_phone(raw);
        self.errors.remove("phone");
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.remove("email");
    }

    /// True while the simulated payment pause is running; the surface
    /// must keep the form non-interactive.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Recorded inline errors, keyed by field.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Validate, then hold in the processing state for the simulated
    /// payment. The pause cannot be cancelled once entered.
    pub async fn submit<P: PaymentProcessor + ?Sized>(
        &mut self,
        total: u32,
        processor: &P,
    ) -> Result<CheckoutOutcome, PaymentError> {
        let user = UserDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        };

        let errors = validate_contact(&user);
        if !errors.is_empty() {
            for error in &errors {
                self.errors
                    .insert(error.field.clone(), error.message.clone());
            }
            return Ok(CheckoutOutcome::Invalid(errors));
        }

        self.processing = true;
        let result = processor.process(total).await;
        self.processing = false;
        result?;

        Ok(CheckoutOutcome::Submitted(user))
    }
}
