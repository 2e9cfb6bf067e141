//! Fixed product catalogs
//!
//! Static tables the wizard offers from: the package size tiers, the
//! same-day pickup windows, and the six wizard steps themselves. These are
//! product data baked into the build, not runtime configuration.

use crate::booking::PackageSize;

/// One tier of the package size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSizeSpec {
    pub size: PackageSize,
    /// Display name ("Small", "Medium", "Large").
    pub name: &'static str,
    pub dimensions: &'static str,
    /// Maximum allowed weight in kilograms.
    pub max_weight_kg: u32,
    /// Added on top of the flat base fare.
    pub surcharge: u32,
    /// Typical contents, shown as guidance.
    pub examples: &'static str,
}

pub static PACKAGE_SIZES: [PackageSizeSpec; 3] = [
    PackageSizeSpec {
        size: PackageSize::Small,
        name: "Small",
        dimensions: "Up to 30cm x 20cm x 15cm",
        max_weight_kg: 2,
        surcharge: 0,
        examples: "Documents, Books, Small Electronics",
    },
    PackageSizeSpec {
        size: PackageSize::Medium,
        name: "Medium",
        dimensions: "Up to 50cm x 40cm x 30cm",
        max_weight_kg: 5,
        surcharge: 30,
        examples: "Clothes, Shoes, Medium Electronics",
    },
    PackageSizeSpec {
        size: PackageSize::Large,
        name: "Large",
        dimensions: "Up to 80cm x 60cm x 50cm",
        max_weight_kg: 15,
        surcharge: 60,
        examples: "Furniture Parts, Large Electronics, Multiple Items",
    },
];

impl PackageSize {
    /// Catalog row for this tier.
    pub fn spec(self) -> &'static PackageSizeSpec {
        match self {
            PackageSize::Small => &PACKAGE_SIZES[0],
            PackageSize::Medium => &PACKAGE_SIZES[1],
            PackageSize::Large => &PACKAGE_SIZES[2],
        }
    }
}

/// One same-day pickup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: &'static str,
    pub label: &'static str,
    /// The evening window is permanently closed.
    pub available: bool,
}

pub static TIME_SLOTS: [TimeSlot; 4] = [
    TimeSlot {
        id: "9-12",
        label: "9:00 AM - 12:00 PM",
        available: true,
    },
    TimeSlot {
        id: "12-3",
        label: "12:00 PM - 3:00 PM",
        available: true,
    },
    TimeSlot {
        id: "3-6",
        label: "3:00 PM - 6:00 PM",
        available: true,
    },
    TimeSlot {
        id: "6-9",
        label: "6:00 PM - 9:00 PM",
        available: false,
    },
];

/// Look up a pickup window by id.
pub fn time_slot(id: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.id == id)
}

/// One stage of the six-stage wizard, as the progress stepper shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStepInfo {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
}

pub static WIZARD_STEPS: [WizardStepInfo; 6] = [
    WizardStepInfo {
        number: 1,
        name: "Pickup & Drop",
        description: "Enter addresses",
    },
    WizardStepInfo {
        number: 2,
        name: "Package",
        description: "Package details",
    },
    WizardStepInfo {
        number: 3,
        name: "Schedule",
        description: "Pickup time",
    },
    WizardStepInfo {
        number: 4,
        name: "Summary",
        description: "Review order",
    },
    WizardStepInfo {
        number: 5,
        name: "Checkout",
        description: "Payment",
    },
    WizardStepInfo {
        number: 6,
        name: "Confirmation",
        description: "Complete",
    },
];
