//! End-to-end wizard scenarios
//!
//! Drives the real host and step controllers through the flows a customer
//! would take, with paused tokio time for the checkout pause.

use chrono::NaiveDate;

use shyp_booking::reference::looks_like_reference;
use shyp_booking::serviceability::DeliveryLeg;
use shyp_booking::state::{BookingState, LAST_STEP};
use shyp_booking::steps::address::{AddressField, AddressOutcome, AddressStep};
use shyp_booking::steps::checkout::MockPaymentProcessor;
use shyp_booking::steps::confirmation::confirmation_data;
use shyp_booking::steps::package::PackageOutcome;
use shyp_booking::steps::schedule::ScheduleOutcome;
use shyp_booking::{BookingWizard, CheckoutResult, WizardEvent};
use shyp_types::{DeliveryType, PackageSize};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn fill_addresses(step: &mut AddressStep, pickup_zip: &str, drop_zip: &str) {
    step.edit(DeliveryLeg::Pickup, AddressField::Street, "221B MG Road");
    step.edit(DeliveryLeg::Pickup, AddressField::City, "Mumbai");
    step.edit(DeliveryLeg::Pickup, AddressField::ZipCode, pickup_zip);
    step.edit(DeliveryLeg::Drop, AddressField::Street, "14 Residency Road");
    step.edit(DeliveryLeg::Drop, AddressField::City, "Bengaluru");
    step.edit(DeliveryLeg::Drop, AddressField::ZipCode, drop_zip);
}

#[tokio::test(start_paused = true)]
async fn test_happy_path_ends_booked_on_the_confirmation_step() {
    let mut wizard = BookingWizard::new();

    // Addresses.
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "400001", "560001");
    address.set_delivery_type(DeliveryType::Express);
    let AddressOutcome::Submitted {
        details,
        serviceable,
        serviceability_error,
    } = address.submit()
    else {
        panic!("expected address submission");
    };
    assert!(serviceable);
    assert!(serviceability_error.is_none());
    wizard
        .apply(WizardEvent::AddressSubmitted {
            details,
            serviceable,
        })
        .unwrap();
    assert_eq!(wizard.state().current_step, 2);

    // Package.
    let mut package = wizard.package_step().unwrap();
    package.select_size(PackageSize::Medium);
    package.set_weight("3.5");
    package.set_description("Books - 3 novels and 2 textbooks");
    let PackageOutcome::Submitted { package, pricing } = package.submit() else {
        panic!("expected package submission");
    };
    assert!(pricing.is_consistent());
    assert_eq!(pricing.express_charge, 100);
    wizard
        .apply(WizardEvent::PackageSubmitted { package, pricing })
        .unwrap();
    assert_eq!(wizard.state().current_step, 3);

    // Schedule.
    let mut schedule = wizard.schedule_step(today()).unwrap();
    assert!(schedule.is_express());
    let tomorrow = schedule.date_options()[0].date;
    schedule.select_date(tomorrow).unwrap();
    schedule.select_time_slot("9-12").unwrap();
    let ScheduleOutcome::Submitted(schedule) = schedule.submit() else {
        panic!("expected schedule submission");
    };
    wizard
        .apply(WizardEvent::ScheduleSubmitted { schedule })
        .unwrap();
    assert_eq!(wizard.state().current_step, 4);

    // Summary.
    wizard.apply(WizardEvent::SummaryConfirmed).unwrap();
    assert_eq!(wizard.state().current_step, 5);

    // Checkout.
    let mut checkout = wizard.checkout_step();
    checkout.set_name("Asha Rao");
    checkout.set_phone("98765 43210");
    checkout.set_email("asha.rao@example.com");
    let result = wizard
        .submit_checkout(&mut checkout, &MockPaymentProcessor)
        .await
        .unwrap();
    assert_eq!(result, CheckoutResult::Booked);

    // Confirmation.
    let state = wizard.state();
    assert_eq!(state.current_step, LAST_STEP);
    assert!(!state.is_loading);
    let reference = state.booking_reference.as_deref().unwrap();
    assert!(looks_like_reference(reference), "got {reference}");

    let confirmation = confirmation_data(state).unwrap();
    assert_eq!(confirmation.user.unwrap().phone, "9876543210");

    // Start over.
    wizard.apply(WizardEvent::NewBookingRequested).unwrap();
    assert_eq!(*wizard.state(), BookingState::initial());
}

#[test]
fn test_unserviceable_drop_blocks_the_first_step() {
    let mut wizard = BookingWizard::new();
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "400001", "999999");

    let AddressOutcome::Submitted {
        details,
        serviceable,
        serviceability_error,
    } = address.submit()
    else {
        panic!("expected address submission");
    };
    assert!(!serviceable);
    let message = serviceability_error.unwrap();
    assert!(message.starts_with("Drop location"), "got {message}");
    assert!(!message.contains("Pickup"));

    wizard
        .apply(WizardEvent::AddressSubmitted {
            details,
            serviceable,
        })
        .unwrap();
    assert_eq!(wizard.state().current_step, 1);
    assert_eq!(wizard.state().is_serviceable, Some(false));
}

#[test]
fn test_malformed_zip_never_reaches_serviceability() {
    // "99999" is short, so validation rejects it even though it is not on
    // the blocklist; no serviceable flag is produced at all.
    let wizard = BookingWizard::new();
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "99999", "560001");

    let AddressOutcome::Invalid(errors) = address.submit() else {
        panic!("expected invalid");
    };
    assert_eq!(errors[0].field, "pickup.zip_code");
    assert_eq!(wizard.state().is_serviceable, None);
}

#[test]
fn test_overweight_large_package_is_rejected_with_the_limit() {
    let mut wizard = BookingWizard::new();
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "400001", "560001");
    let AddressOutcome::Submitted {
        details,
        serviceable,
        ..
    } = address.submit()
    else {
        panic!("expected address submission");
    };
    wizard
        .apply(WizardEvent::AddressSubmitted {
            details,
            serviceable,
        })
        .unwrap();

    let mut package = wizard.package_step().unwrap();
    package.select_size(PackageSize::Large);
    package.set_weight("16");
    package.set_description("Furniture parts");
    let PackageOutcome::Invalid(errors) = package.submit() else {
        panic!("expected invalid");
    };
    assert!(errors[0].message.contains("15 kg"));

    package.set_weight("10");
    assert!(matches!(package.submit(), PackageOutcome::Submitted { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_bad_phone_number_keeps_the_wizard_on_checkout() {
    let mut wizard = BookingWizard::new();
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "400001", "560001");
    let AddressOutcome::Submitted {
        details,
        serviceable,
        ..
    } = address.submit()
    else {
        panic!("expected address submission");
    };
    wizard
        .apply(WizardEvent::AddressSubmitted {
            details,
            serviceable,
        })
        .unwrap();

    let mut package = wizard.package_step().unwrap();
    package.set_description("Documents");
    let PackageOutcome::Submitted { package, pricing } = package.submit() else {
        panic!("expected package submission");
    };
    wizard
        .apply(WizardEvent::PackageSubmitted { package, pricing })
        .unwrap();

    let mut schedule = wizard.schedule_step(today()).unwrap();
    schedule.select_time_slot("12-3").unwrap();
    let ScheduleOutcome::Submitted(schedule) = schedule.submit() else {
        panic!("expected schedule submission");
    };
    wizard
        .apply(WizardEvent::ScheduleSubmitted { schedule })
        .unwrap();
    wizard.apply(WizardEvent::SummaryConfirmed).unwrap();

    let mut checkout = wizard.checkout_step();
    checkout.set_name("Asha Rao");
    checkout.set_phone("5876543210");
    checkout.set_email("asha.rao@example.com");
    let result = wizard
        .submit_checkout(&mut checkout, &MockPaymentProcessor)
        .await
        .unwrap();
    let CheckoutResult::Rejected(errors) = result else {
        panic!("expected rejection");
    };
    assert_eq!(errors[0].field, "phone");
    assert_eq!(wizard.state().current_step, 5);
    assert!(wizard.state().booking_reference.is_none());
}

#[test]
fn test_back_and_edit_move_between_steps() {
    let mut wizard = BookingWizard::new();
    let mut address = wizard.address_step();
    fill_addresses(&mut address, "400001", "560001");
    let AddressOutcome::Submitted {
        details,
        serviceable,
        ..
    } = address.submit()
    else {
        panic!("expected address submission");
    };
    wizard
        .apply(WizardEvent::AddressSubmitted {
            details,
            serviceable,
        })
        .unwrap();
    assert_eq!(wizard.state().current_step, 2);

    wizard.apply(WizardEvent::BackRequested).unwrap();
    assert_eq!(wizard.state().current_step, 1);

    // Re-opening the step keeps the committed details.
    let reopened = wizard.address_step();
    assert!(reopened.is_form_valid());

    wizard.apply(WizardEvent::EditRequested { step: 2 }).unwrap();
    assert_eq!(wizard.state().current_step, 2);
}
