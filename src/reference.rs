//! Booking reference generation
//!
//! References are `LS-` plus the current Unix-epoch milliseconds in base
//! 36 plus four random base-36 characters, upper-cased. They are meant to
//! be human-shareable codes, not identifiers: nothing checks for
//! collisions, the timestamp half just makes them unlikely within a
//! session.

use chrono::Utc;
use rand::Rng;

const REFERENCE_PREFIX: &str = "LS-";
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 4;

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// Deterministic core: the caller supplies the clock reading and the
/// random source, so tests can pin both.
pub fn booking_reference_with<R: Rng + ?Sized>(unix_millis: u64, rng: &mut R) -> String {
    let mut suffix = String::with_capacity(RANDOM_SUFFIX_LEN);
    for _ in 0..RANDOM_SUFFIX_LEN {
        suffix.push(BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())] as char);
    }
    format!("{REFERENCE_PREFIX}{}{suffix}", to_base36(unix_millis)).to_uppercase()
}

/// Issue a reference from the wall clock and the thread-local generator.
pub fn booking_reference() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    booking_reference_with(millis, &mut rand::thread_rng())
}

/// True when `reference` has the shape this module issues.
pub fn looks_like_reference(reference: &str) -> bool {
    match reference.strip_prefix(REFERENCE_PREFIX) {
        Some(rest) => {
            !rest.is_empty()
                && rest
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        }
        None => false,
    }
}
