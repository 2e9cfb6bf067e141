//! Price quoting
//!
//! Flat base fare plus the size surcharge, a mocked distance charge, and
//! the express surcharge. The distance charge stands in for a geocoded
//! lookup and is resampled on every quote, so two quotes for the same
//! booking can legitimately differ; the package step decides which quote
//! gets committed. Callers that need a pinned roll pass their own random
//! source to [`price_quote_with`].

use rand::Rng;
use shyp_types::{DeliveryType, PackageSize, PricingBreakdown};

/// Flat fare before the size surcharge.
pub const BASE_FARE: u32 = 50;
/// Flat surcharge for express delivery.
pub const EXPRESS_CHARGE: u32 = 100;
/// Mocked distance charge bounds, inclusive.
pub const DISTANCE_CHARGE_MIN: u32 = 20;
pub const DISTANCE_CHARGE_MAX: u32 = 69;

/// Quote with a caller-supplied random source.
pub fn price_quote_with<R: Rng + ?Sized>(
    delivery_type: DeliveryType,
    size: PackageSize,
    rng: &mut R,
) -> PricingBreakdown {
    let base_price = BASE_FARE + size.spec().surcharge;
    let distance_charge = rng.gen_range(DISTANCE_CHARGE_MIN..=DISTANCE_CHARGE_MAX);
    let express_charge = if delivery_type.is_express() {
        EXPRESS_CHARGE
    } else {
        0
    };

    PricingBreakdown {
        base_price,
        distance_charge,
        express_charge,
        total: base_price + distance_charge + express_charge,
    }
}

/// Quote using the thread-local generator.
pub fn price_quote(delivery_type: DeliveryType, size: PackageSize) -> PricingBreakdown {
    price_quote_with(delivery_type, size, &mut rand::thread_rng())
}
