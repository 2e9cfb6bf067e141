//! Package step controller
//!
//! Size selection drives the live price preview: switching tiers
//! resamples the quote, resets the weight field, clears the step's
//! errors, and raises a transient "price updated" banner. Weight and
//! description validation runs on submit; the quote shown at submit time
//! is the one that travels upward for the host to commit.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use shyp_types::{DeliveryType, PackageDetails, PackageSize, PackageSizeSpec, PricingBreakdown};

use super::TransientNotice;
use crate::pricing;
use crate::validation::{validate_package, FieldError};

/// How long the price-updated banner stays up.
pub const PRICE_NOTICE_TTL: Duration = Duration::from_secs(3);

const PRICE_NOTICE: &str = "Price updated based on selected package size";

/// What pressing continue on the package step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageOutcome {
    /// One or more fields rejected; nothing travels upward.
    Invalid(Vec<FieldError>),
    /// The quote previewed at submit time travels with the details.
    Submitted {
        package: PackageDetails,
        pricing: PricingBreakdown,
    },
}

#[derive(Debug)]
pub struct PackageStep {
    delivery_type: DeliveryType,
    size: PackageSize,
    /// Raw input text, parsed on submit so garbage is reported, not lost.
    weight_input: String,
    description: String,
    errors: HashMap<String, String>,
    quote: PricingBreakdown,
    price_notice: Option<TransientNotice>,
}

impl PackageStep {
    /// Start the step. `delivery_type` comes from the committed delivery
    /// details; it decides the express component of every quote.
    pub fn new(initial: Option<&PackageDetails>, delivery_type: DeliveryType) -> Self {
        Self::new_with(initial, delivery_type, &mut rand::thread_rng())
    }

    /// Like [`PackageStep::new`] with a caller-supplied random source.
    pub fn new_with<R: Rng + ?Sized>(
        initial: Option<&PackageDetails>,
        delivery_type: DeliveryType,
        rng: &mut R,
    ) -> Self {
        let size = initial.map(|p| p.size).unwrap_or_default();
        PackageStep {
            delivery_type,
            size,
            weight_input: initial
                .and_then(|p| p.weight)
                .map(|w| w.to_string())
                .unwrap_or_default(),
            description: initial
                .and_then(|p| p.description.clone())
                .unwrap_or_default(),
            errors: HashMap::new(),
            quote: pricing::price_quote_with(delivery_type, size, rng),
            price_notice: None,
        }
    }

    pub fn size(&self) -> PackageSize {
        self.size
    }

    /// Catalog row for the selected tier (max weight, dimensions, ...).
    pub fn size_spec(&self) -> &'static PackageSizeSpec {
        self.size.spec()
    }

    /// Current quote for the preview panel.
    pub fn quote(&self) -> PricingBreakdown {
        self.quote
    }

    /// Recorded inline errors, keyed by field.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Select a tier; a changed tier resamples the quote, resets the
    /// weight field, clears errors and raises the price-updated banner.
    pub fn select_size(&mut self, size: PackageSize) {
        self.select_size_with(size, &mut rand::thread_rng())
    }

    /// Like [`PackageStep::select_size`] with a caller-supplied random source.
    pub fn select_size_with<R: Rng + ?Sized>(&mut self, size: PackageSize, rng: &mut R) {
        if size != self.size {
            self.price_notice = Some(TransientNotice::new(PRICE_NOTICE, PRICE_NOTICE_TTL));
        }
        self.size = size;
        self.weight_input.clear();
        self.errors.clear();
        self.quote = pricing::price_quote_with(self.delivery_type, size, rng);
        tracing::debug!(size = ?self.size, total = self.quote.total, "package quote refreshed");
    }

    pub fn set_weight(&mut self, raw: impl Into<String>) {
        self.weight_input = raw.into();
        self.errors.remove("weight");
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.remove("description");
    }

    /// Live banner message, if the last size change was recent enough.
    pub fn price_notice(&self) -> Option<&'static str> {
        self.price_notice.as_ref().and_then(TransientNotice::message)
    }

    /// Banner message as of `now`; lets tests pin the clock.
    pub fn price_notice_at(&self, now: Instant) -> Option<&'static str> {
        self.price_notice
            .as_ref()
            .and_then(|notice| notice.message_at(now))
    }

    /// Validate weight and description, then hand the details and the
    /// current quote upward.
    pub fn submit(&mut self) -> PackageOutcome {
        let weight = {
            let raw = self.weight_input.trim();
            if raw.is_empty() {
                None
            } else {
                // Unparseable input surfaces as an invalid weight.
                Some(raw.parse::<f64>().unwrap_or(f64::NAN))
            }
        };

        let errors = validate_package(self.size, weight, &self.description);
        if !errors.is_empty() {
            for error in &errors {
                self.errors
                    .insert(error.field.clone(), error.message.clone());
            }
            return PackageOutcome::Invalid(errors);
        }

        PackageOutcome::Submitted {
            package: PackageDetails {
                size: self.size,
                weight,
                description: Some(self.description.clone()),
            },
            pricing: self.quote,
        }
    }
}
