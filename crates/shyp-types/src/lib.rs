//! Shared Booking Types for Let's Shyp
//!
//! This crate is the SINGLE SOURCE OF TRUTH for every value that crosses a
//! rendering-surface boundary: the step records the wizard commits, the
//! price breakdown, and the fixed product catalogs (package sizes, pickup
//! time slots, wizard steps).
//!
//! ## Rules
//!
//! 1. Boundary types live here - the core crate adds behaviour, not shapes
//! 2. JSON uses camelCase field names and lowercase enum tags, matching the
//!    shapes the booking surfaces already exchange
//! 3. Catalogs are `const` tables - product data, not configuration

pub mod booking;
pub mod catalog;

pub use booking::{
    Address, DeliveryDetails, DeliveryType, PackageDetails, PackageSize, PricingBreakdown,
    ScheduleDetails, UserDetails,
};
pub use catalog::{
    time_slot, PackageSizeSpec, TimeSlot, WizardStepInfo, PACKAGE_SIZES, TIME_SLOTS, WIZARD_STEPS,
};
