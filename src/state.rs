//! Booking wizard state machine
//!
//! One `BookingState` exists per wizard session, owned by the wizard host.
//! Every mutation goes through [`reduce`], a pure function from the current
//! snapshot and an action to a fresh snapshot; the input state is never
//! touched. Side effects (clocks, randomness, timers) live with the
//! callers - the reducer only records what it is handed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shyp_types::{
    DeliveryDetails, PackageDetails, PricingBreakdown, ScheduleDetails, UserDetails,
};

/// First wizard step (addresses).
pub const FIRST_STEP: u8 = 1;
/// Confirmation step; also forced by [`BookingAction::CompleteBooking`].
pub const LAST_STEP: u8 = 6;

/// Aggregate state for one booking session.
///
/// Detail records stay `None` until their step commits them. A non-`None`
/// `booking_reference` marks the terminal "booked" condition; from there
/// only [`BookingAction::Reset`] is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingState {
    pub current_step: u8,
    pub delivery_details: Option<DeliveryDetails>,
    pub package_details: Option<PackageDetails>,
    pub schedule_details: Option<ScheduleDetails>,
    pub user_details: Option<UserDetails>,
    pub pricing: Option<PricingBreakdown>,
    pub booking_reference: Option<String>,
    /// Field key -> inline message, e.g. `"pickup.zip_code"`.
    pub errors: HashMap<String, String>,
    /// `None` until the address step runs its first serviceability check.
    pub is_serviceable: Option<bool>,
    pub is_loading: bool,
}

impl BookingState {
    /// Fresh session: step 1, nothing committed, no errors.
    pub fn initial() -> Self {
        BookingState {
            current_step: FIRST_STEP,
            delivery_details: None,
            package_details: None,
            schedule_details: None,
            user_details: None,
            pricing: None,
            booking_reference: None,
            errors: HashMap::new(),
            is_serviceable: None,
            is_loading: false,
        }
    }

    /// A booking is complete once a reference has been issued.
    pub fn is_booked(&self) -> bool {
        self.booking_reference.is_some()
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Actions accepted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    /// Jump to a step. The reducer performs no bounds check; callers must
    /// only request steps `FIRST_STEP..=LAST_STEP`. The wizard host is the
    /// only caller and upholds this.
    SetStep(u8),
    SetDeliveryDetails(DeliveryDetails),
    SetPackageDetails(PackageDetails),
    SetScheduleDetails(ScheduleDetails),
    SetUserDetails(UserDetails),
    SetPricing(PricingBreakdown),
    SetServiceability(bool),
    /// Upsert one field's inline message.
    SetError { field: String, message: String },
    /// Drop one field's inline message, if present.
    ClearError(String),
    SetLoading(bool),
    /// Issue the reference and force the confirmation step. The only
    /// transition into the terminal state.
    CompleteBooking(String),
    /// Return to the exact initial state.
    Reset,
}

/// Apply one action, producing the next snapshot.
pub fn reduce(state: &BookingState, action: &BookingAction) -> BookingState {
    let mut next = state.clone();
    match action {
        BookingAction::SetStep(step) => next.current_step = *step,
        BookingAction::SetDeliveryDetails(details) => {
            next.delivery_details = Some(details.clone())
        }
        BookingAction::SetPackageDetails(package) => next.package_details = Some(package.clone()),
        BookingAction::SetScheduleDetails(schedule) => {
            next.schedule_details = Some(schedule.clone())
        }
        BookingAction::SetUserDetails(user) => next.user_details = Some(user.clone()),
        BookingAction::SetPricing(pricing) => next.pricing = Some(*pricing),
        BookingAction::SetServiceability(serviceable) => {
            next.is_serviceable = Some(*serviceable)
        }
        BookingAction::SetError { field, message } => {
            next.errors.insert(field.clone(), message.clone());
        }
        BookingAction::ClearError(field) => {
            next.errors.remove(field);
        }
        BookingAction::SetLoading(loading) => next.is_loading = *loading,
        BookingAction::CompleteBooking(reference) => {
            next.booking_reference = Some(reference.clone());
            next.current_step = LAST_STEP;
        }
        BookingAction::Reset => next = BookingState::initial(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use shyp_types::{DeliveryType, PackageSize};

    fn sample_package() -> PackageDetails {
        PackageDetails {
            size: PackageSize::Medium,
            weight: Some(3.5),
            description: Some("Books".to_string()),
        }
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let state = BookingState::initial();
        let action = BookingAction::SetPackageDetails(sample_package());
        assert_eq!(reduce(&state, &action), reduce(&state, &action));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = BookingState::initial();
        let next = reduce(&state, &BookingAction::SetStep(3));
        assert_eq!(state.current_step, FIRST_STEP);
        assert_eq!(next.current_step, 3);
    }

    #[test]
    fn test_complete_booking_forces_confirmation_step() {
        let state = reduce(
            &BookingState::initial(),
            &BookingAction::CompleteBooking("LS-ABC123".to_string()),
        );
        assert_eq!(state.current_step, LAST_STEP);
        assert_eq!(state.booking_reference.as_deref(), Some("LS-ABC123"));
        assert!(state.is_booked());
    }

    #[test]
    fn test_error_upsert_and_clear() {
        let mut state = reduce(
            &BookingState::initial(),
            &BookingAction::SetError {
                field: "weight".to_string(),
                message: "too heavy".to_string(),
            },
        );
        state = reduce(
            &state,
            &BookingAction::SetError {
                field: "weight".to_string(),
                message: "still too heavy".to_string(),
            },
        );
        assert_eq!(state.errors.get("weight").map(String::as_str), Some("still too heavy"));

        state = reduce(&state, &BookingAction::ClearError("weight".to_string()));
        assert!(state.errors.is_empty());

        // Clearing an absent key is a no-op, not an error.
        let same = reduce(&state, &BookingAction::ClearError("weight".to_string()));
        assert_eq!(same, state);
    }

    #[test]
    fn test_reset_returns_exact_initial_state() {
        let mut state = BookingState::initial();
        for action in [
            BookingAction::SetStep(4),
            BookingAction::SetPackageDetails(sample_package()),
            BookingAction::SetServiceability(true),
            BookingAction::SetLoading(true),
            BookingAction::SetError {
                field: "name".to_string(),
                message: "required".to_string(),
            },
            BookingAction::CompleteBooking("LS-XYZ".to_string()),
        ] {
            state = reduce(&state, &action);
        }
        assert_eq!(reduce(&state, &BookingAction::Reset), BookingState::initial());
    }

    #[test]
    fn test_delivery_type_is_stored_not_derived() {
        let details = DeliveryDetails {
            pickup_address: Default::default(),
            drop_address: Default::default(),
            delivery_instructions: None,
            delivery_type: DeliveryType::Express,
        };
        let state = reduce(
            &BookingState::initial(),
            &BookingAction::SetDeliveryDetails(details.clone()),
        );
        assert_eq!(
            state.delivery_details.map(|d| d.delivery_type),
            Some(DeliveryType::Express)
        );
    }
}
