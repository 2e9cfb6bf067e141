//! Summary step controller
//!
//! Read-only review of everything committed so far. Guards completeness:
//! all four detail records must exist before checkout can begin, and the
//! first missing one is named. Also watches the committed total so the
//! surface can flash a price-updated banner when a revisit changed it.

use std::time::{Duration, Instant};

use shyp_types::{DeliveryDetails, PackageDetails, PricingBreakdown, ScheduleDetails};

use super::TransientNotice;
use crate::error::BookingError;
use crate::state::BookingState;

/// How long the price-updated banner stays up on the summary.
pub const PRICE_CHANGE_NOTICE_TTL: Duration = Duration::from_secs(5);

const PRICE_CHANGE_NOTICE: &str = "The pricing has been recalculated based on current rates";

/// Everything the summary renders, borrowed from the committed state.
#[derive(Debug, Clone, Copy)]
pub struct SummaryData<'a> {
    pub delivery: &'a DeliveryDetails,
    pub package: &'a PackageDetails,
    pub schedule: &'a ScheduleDetails,
    pub pricing: &'a PricingBreakdown,
}

/// Collect the four committed records, or name the first one missing.
pub fn summary_data(state: &BookingState) -> Result<SummaryData<'_>, BookingError> {
    let delivery = state
        .delivery_details
        .as_ref()
        .ok_or(BookingError::IncompleteBooking("delivery details"))?;
    let package = state
        .package_details
        .as_ref()
        .ok_or(BookingError::IncompleteBooking("package details"))?;
    let schedule = state
        .schedule_details
        .as_ref()
        .ok_or(BookingError::IncompleteBooking("schedule details"))?;
    let pricing = state
        .pricing
        .as_ref()
        .ok_or(BookingError::IncompleteBooking("pricing"))?;

    Ok(SummaryData {
        delivery,
        package,
        schedule,
        pricing,
    })
}

/// Tracks the total shown across summary visits.
#[derive(Debug, Default)]
pub struct SummaryStep {
    previous_total: Option<u32>,
    notice: Option<TransientNotice>,
}

impl SummaryStep {
    pub fn new() -> Self {
        SummaryStep::default()
    }

    /// Record the currently shown total; raises the banner when it moved
    /// since the last visit.
    pub fn observe_total(&mut self, total: u32) {
        if let Some(previous) = self.previous_total {
            if previous != total {
                self.notice = Some(TransientNotice::new(
                    PRICE_CHANGE_NOTICE,
                    PRICE_CHANGE_NOTICE_TTL,
                ));
            }
        }
        self.previous_total = Some(total);
    }

    pub fn price_notice(&self) -> Option<&'static str> {
        self.notice.as_ref().and_then(TransientNotice::message)
    }

    pub fn price_notice_at(&self, now: Instant) -> Option<&'static str> {
        self.notice.as_ref().and_then(|notice| notice.message_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, BookingAction};
    use shyp_types::{DeliveryType, PackageSize};

    #[test]
    fn test_missing_records_are_named_in_order() {
        let state = BookingState::initial();
        let err = summary_data(&state).unwrap_err();
        assert_eq!(err, BookingError::IncompleteBooking("delivery details"));

        let state = reduce(
            &state,
            &BookingAction::SetDeliveryDetails(shyp_types::DeliveryDetails {
                pickup_address: Default::default(),
                drop_address: Default::default(),
                delivery_instructions: None,
                delivery_type: DeliveryType::Normal,
            }),
        );
        let err = summary_data(&state).unwrap_err();
        assert_eq!(err, BookingError::IncompleteBooking("package details"));
    }

    #[test]
    fn test_complete_state_reviews_cleanly() {
        let mut state = BookingState::initial();
        for action in [
            BookingAction::SetDeliveryDetails(shyp_types::DeliveryDetails {
                pickup_address: Default::default(),
                drop_address: Default::default(),
                delivery_instructions: None,
                delivery_type: DeliveryType::Express,
            }),
            BookingAction::SetPackageDetails(shyp_types::PackageDetails {
                size: PackageSize::Small,
                weight: None,
                description: Some("Documents".to_string()),
            }),
            BookingAction::SetScheduleDetails(shyp_types::ScheduleDetails {
                pickup_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 11).unwrap(),
                pickup_time: "9:00 AM - 12:00 PM".to_string(),
            }),
            BookingAction::SetPricing(shyp_types::PricingBreakdown {
                base_price: 50,
                distance_charge: 20,
                express_charge: 100,
                total: 170,
            }),
        ] {
            state = reduce(&state, &action);
        }

        let data = summary_data(&state).unwrap();
        assert_eq!(data.pricing.total, 170);
        assert!(data.delivery.delivery_type.is_express());
    }

    #[test]
    fn test_price_change_raises_notice_once_observed() {
        let mut step = SummaryStep::new();
        step.observe_total(170);
        assert!(step.price_notice().is_none());

        step.observe_total(170);
        assert!(step.price_notice().is_none());

        step.observe_total(195);
        let now = Instant::now();
        assert!(step.price_notice_at(now).is_some());
        assert!(step.price_notice_at(now + PRICE_CHANGE_NOTICE_TTL).is_none());
    }
}
