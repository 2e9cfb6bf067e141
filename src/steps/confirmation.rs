//! Confirmation step controller
//!
//! Terminal read-only view: the issued reference plus whatever records
//! were committed along the way. There is nothing to submit here; the
//! only way forward is the host's new-booking reset.

use shyp_types::{
    DeliveryDetails, PackageDetails, PricingBreakdown, ScheduleDetails, UserDetails,
};

use crate::state::BookingState;

/// Everything the confirmation screen renders.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationData<'a> {
    pub booking_reference: &'a str,
    pub delivery: Option<&'a DeliveryDetails>,
    pub package: Option<&'a PackageDetails>,
    pub schedule: Option<&'a ScheduleDetails>,
    pub user: Option<&'a UserDetails>,
    pub pricing: Option<&'a PricingBreakdown>,
}

/// `None` until a booking has actually completed.
pub fn confirmation_data(state: &BookingState) -> Option<ConfirmationData<'_>> {
    let booking_reference = state.booking_reference.as_deref()?;
    Some(ConfirmationData {
        booking_reference,
        delivery: state.delivery_details.as_ref(),
        package: state.package_details.as_ref(),
        schedule: state.schedule_details.as_ref(),
        user: state.user_details.as_ref(),
        pricing: state.pricing.as_ref(),
    })
}
