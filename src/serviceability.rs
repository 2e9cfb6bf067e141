//! Serviceable-area lookup
//!
//! The real product would geocode against coverage polygons; this demo
//! keeps a fixed blocklist of postal codes instead. Format checking is the
//! validator's job - any zip outside the blocklist counts as serviceable
//! here, well-formed or not, and the lookup takes no network or external
//! dependency.

use std::fmt;

use serde::Serialize;
use shyp_types::{Address, DeliveryDetails};

/// Postal codes we pretend not to cover.
pub const UNSERVICEABLE_ZIP_CODES: [&str; 3] = ["000000", "999999", "111111"];

/// Codes a surface can suggest when a serviceability check fails.
pub const SUGGESTED_SERVICEABLE_ZIPS: [&str; 3] = ["400001", "110001", "560001"];

/// Which side of the delivery failed a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryLeg {
    Pickup,
    Drop,
}

impl fmt::Display for DeliveryLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryLeg::Pickup => write!(f, "Pickup"),
            DeliveryLeg::Drop => write!(f, "Drop"),
        }
    }
}

/// Static blocklist lookup.
pub fn is_serviceable(address: &Address) -> bool {
    !UNSERVICEABLE_ZIP_CODES.contains(&address.zip_code.as_str())
}

/// Pickup is checked before drop; the first failing leg is the one
/// reported to the customer.
pub fn first_unserviceable_leg(details: &DeliveryDetails) -> Option<DeliveryLeg> {
    if !is_serviceable(&details.pickup_address) {
        return Some(DeliveryLeg::Pickup);
    }
    if !is_serviceable(&details.drop_address) {
        return Some(DeliveryLeg::Drop);
    }
    None
}
