//! Scripted happy-path booking
//!
//! Drives the real wizard host and step controllers end to end and prints
//! the issued reference. Run with `RUST_LOG=shyp_booking=debug` to watch
//! the transitions.

use anyhow::{bail, Result};
use chrono::Local;
use tracing_subscriber::EnvFilter;

use shyp_booking::serviceability::DeliveryLeg;
use shyp_booking::steps::address::{AddressField, AddressOutcome};
use shyp_booking::steps::checkout::MockPaymentProcessor;
use shyp_booking::steps::confirmation::confirmation_data;
use shyp_booking::steps::package::PackageOutcome;
use shyp_booking::steps::schedule::ScheduleOutcome;
use shyp_booking::steps::summary::summary_data;
use shyp_booking::{BookingWizard, CheckoutResult, WizardEvent};
use shyp_types::{DeliveryType, PackageSize, WIZARD_STEPS};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flow: Vec<&str> = WIZARD_STEPS.iter().map(|step| step.name).collect();
    println!("Let's Shyp booking: {}", flow.join(" -> "));

    let mut wizard = BookingWizard::new();

    // Step 1: pickup and drop addresses, express delivery.
    let mut address = wizard.address_step();
    address.edit(DeliveryLeg::Pickup, AddressField::Street, "221B MG Road");
    address.edit(DeliveryLeg::Pickup, AddressField::City, "Mumbai");
    address.edit(DeliveryLeg::Pickup, AddressField::ZipCode, "400001");
    address.edit(DeliveryLeg::Drop, AddressField::Street, "14 Residency Road");
    address.edit(DeliveryLeg::Drop, AddressField::City, "Bengaluru");
    address.edit(DeliveryLeg::Drop, AddressField::ZipCode, "560001");
    address.set_delivery_type(DeliveryType::Express);
    address.set_delivery_instructions("Call on arrival");
    match address.submit() {
        AddressOutcome::Submitted {
            details,
            serviceable,
            ..
        } => {
            wizard.apply(WizardEvent::AddressSubmitted {
                details,
                serviceable,
            })?;
        }
        AddressOutcome::Invalid(errors) => bail!("address step rejected: {errors:?}"),
    }

    // Step 2: a medium package.
    let mut package = wizard.package_step()?;
    package.select_size(PackageSize::Medium);
    package.set_weight("3.5");
    package.set_description("Books - 3 novels and 2 textbooks");
    match package.submit() {
        PackageOutcome::Submitted { package, pricing } => {
            println!(
                "Quoted: base {} + distance {} + express {} = {}",
                pricing.base_price, pricing.distance_charge, pricing.express_charge, pricing.total
            );
            wizard.apply(WizardEvent::PackageSubmitted { package, pricing })?;
        }
        PackageOutcome::Invalid(errors) => bail!("package step rejected: {errors:?}"),
    }

    // Step 3: tomorrow morning.
    let mut schedule = wizard.schedule_step(Local::now().date_naive())?;
    let tomorrow = schedule.date_options()[0].date;
    schedule.select_date(tomorrow)?;
    schedule.select_time_slot("9-12")?;
    match schedule.submit() {
        ScheduleOutcome::Submitted(schedule) => {
            wizard.apply(WizardEvent::ScheduleSubmitted { schedule })?;
        }
        ScheduleOutcome::Invalid(errors) => bail!("schedule step rejected: {errors:?}"),
    }

    // Step 4: review.
    let summary = summary_data(wizard.state())?;
    println!(
        "Review: {} package, pickup {} ({}), total {}",
        summary.package.size.spec().name,
        summary.schedule.pickup_date,
        summary.schedule.pickup_time,
        summary.pricing.total
    );
    wizard.apply(WizardEvent::SummaryConfirmed)?;

    // Step 5: contact details and the simulated payment pause.
    let mut checkout = wizard.checkout_step();
    checkout.set_name("Asha Rao");
    checkout.set_phone("98765 43210");
    checkout.set_email("asha.rao@example.com");
    match wizard
        .submit_checkout(&mut checkout, &MockPaymentProcessor)
        .await?
    {
        CheckoutResult::Booked => {}
        CheckoutResult::Rejected(errors) => bail!("checkout rejected: {errors:?}"),
    }

    // Step 6: confirmation.
    match confirmation_data(wizard.state()) {
        Some(confirmation) => {
            println!("Booking confirmed: {}", confirmation.booking_reference)
        }
        None => bail!("no booking reference after checkout"),
    }

    println!("{}", serde_json::to_string_pretty(wizard.state())?);

    Ok(())
}
