//! Booking value records
//!
//! Immutable value types committed step by step as the customer walks the
//! wizard. Each record is replaced wholesale when its step is re-submitted;
//! nothing here is mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pickup or drop location as entered by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Six ASCII digits once validated; stored as entered.
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

/// Delivery speed chosen on the address step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    /// Same-day promise, flat surcharge on top of the quote.
    Express,
    #[default]
    Normal,
}

impl DeliveryType {
    pub fn is_express(self) -> bool {
        matches!(self, DeliveryType::Express)
    }
}

/// Everything the address step commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub pickup_address: Address,
    pub drop_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    /// Fixed at creation; never recalculated from distance.
    pub delivery_type: DeliveryType,
}

/// Package size tier; each tier has a row in [`crate::catalog::PACKAGE_SIZES`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Everything the package step commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    pub size: PackageSize,
    /// Kilograms. Optional on entry; validated against the size's maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Typed optional, but validation requires it before the step advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything the schedule step commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetails {
    pub pickup_date: NaiveDate,
    /// Label of a slot from [`crate::catalog::TIME_SLOTS`].
    pub pickup_time: String,
}

/// Contact details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Price estimate shown from the package step onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    /// Flat fare plus the size surcharge.
    pub base_price: u32,
    /// Mocked stand-in for a geocoded distance lookup.
    pub distance_charge: u32,
    /// Flat express surcharge, zero for normal delivery.
    pub express_charge: u32,
    pub total: u32,
}

impl PricingBreakdown {
    /// Holds for every quote the pricing engine produces.
    pub fn is_consistent(&self) -> bool {
        self.total == self.base_price + self.distance_charge + self.express_charge
    }
}
