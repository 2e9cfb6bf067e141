//! Address step controller
//!
//! Collects the pickup and drop addresses, optional delivery
//! instructions, and the delivery speed. Submit runs field validation
//! first, then the serviceability check, pickup before drop. On an
//! unserviceable leg the entered details still travel upward - paired
//! with `serviceable: false` and the banner message naming the failing
//! side - so the host can record what was entered without advancing.

use std::collections::HashMap;

use shyp_types::{Address, DeliveryDetails, DeliveryType};

use crate::serviceability::{first_unserviceable_leg, DeliveryLeg};
use crate::validation::{validate_address, FieldError, DROP_PREFIX, PICKUP_PREFIX};

/// Editable fields on one address block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    City,
    ZipCode,
    Landmark,
}

impl AddressField {
    fn key_suffix(self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::ZipCode => "zip_code",
            AddressField::Landmark => "landmark",
        }
    }
}

/// What pressing continue on the address step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressOutcome {
    /// One or more fields rejected; nothing travels upward.
    Invalid(Vec<FieldError>),
    /// Field validation passed. `serviceable` tells the host whether it
    /// may advance; when false, `serviceability_error` carries the banner
    /// message for the failing leg.
    Submitted {
        details: DeliveryDetails,
        serviceable: bool,
        serviceability_error: Option<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AddressStep {
    pickup: Address,
    drop: Address,
    delivery_instructions: String,
    delivery_type: DeliveryType,
    errors: HashMap<String, String>,
}

impl AddressStep {
    /// Start the step, seeded with previously committed details when the
    /// customer comes back to edit.
    pub fn new(initial: Option<&DeliveryDetails>) -> Self {
        match initial {
            Some(details) => AddressStep {
                pickup: details.pickup_address.clone(),
                drop: details.drop_address.clone(),
                delivery_instructions: details
                    .delivery_instructions
                    .clone()
                    .unwrap_or_default(),
                delivery_type: details.delivery_type,
                errors: HashMap::new(),
            },
            None => AddressStep::default(),
        }
    }

    /// Edit one field; editing clears that field's recorded error.
    pub fn edit(&mut self, leg: DeliveryLeg, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        let (address, prefix) = match leg {
            DeliveryLeg::Pickup => (&mut self.pickup, PICKUP_PREFIX),
            DeliveryLeg::Drop => (&mut self.drop, DROP_PREFIX),
        };
        match field {
            AddressField::Street => address.street = value,
            AddressField::City => address.city = value,
            AddressField::ZipCode => address.zip_code = value,
            AddressField::Landmark => {
                address.landmark = if value.is_empty() { None } else { Some(value) }
            }
        }
        self.errors
            .remove(&format!("{prefix}.{}", field.key_suffix()));
    }

    pub fn set_delivery_instructions(&mut self, value: impl Into<String>) {
        self.delivery_instructions = value.into();
    }

    pub fn set_delivery_type(&mut self, delivery_type: DeliveryType) {
        self.delivery_type = delivery_type;
    }

    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    /// Recorded inline errors, keyed by field path.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Mirror of the form's continue-button predicate: required fields
    /// present, both zips well-formed, no live errors.
    pub fn is_form_valid(&self) -> bool {
        validate_address(&self.pickup, PICKUP_PREFIX).is_empty()
            && validate_address(&self.drop, DROP_PREFIX).is_empty()
            && self.errors.is_empty()
    }

    /// Validate both blocks, then check serviceability (pickup first).
    pub fn submit(&mut self) -> AddressOutcome {
        let mut errors = validate_address(&self.pickup, PICKUP_PREFIX);
        errors.extend(validate_address(&self.drop, DROP_PREFIX));
        if !errors.is_empty() {
            for error in &errors {
                self.errors
                    .insert(error.field.clone(), error.message.clone());
            }
            return AddressOutcome::Invalid(errors);
        }

        let instructions = self.delivery_instructions.trim();
        let details = DeliveryDetails {
            pickup_address: self.pickup.clone(),
            drop_address: self.drop.clone(),
            delivery_instructions: if instructions.is_empty() {
                None
            } else {
                Some(instructions.to_string())
            },
            delivery_type: self.delivery_type,
        };

        match first_unserviceable_leg(&details) {
            Some(leg) => {
                tracing::debug!(%leg, "address step blocked by serviceability");
                AddressOutcome::Submitted {
                    serviceable: false,
                    serviceability_error: Some(format!(
                        "{leg} location is not serviceable. Please try a different address."
                    )),
                    details,
                }
            }
            None => AddressOutcome::Submitted {
                details,
                serviceable: true,
                serviceability_error: None,
            },
        }
    }
}
