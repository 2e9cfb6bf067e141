//! Per-step form validation
//!
//! Pure predicates over the booking records. Each validator collects
//! [`FieldError`]s keyed by field path (`pickup.street`, `weight`, ...) so
//! a surface can render every message inline next to its input; an empty
//! collection means the input passes. Validation always runs before any
//! state is committed, and a failed validation commits nothing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use shyp_types::{Address, PackageSize, UserDetails};

static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Field key prefix for the pickup address block.
pub const PICKUP_PREFIX: &str = "pickup";
/// Field key prefix for the drop address block.
pub const DROP_PREFIX: &str = "drop";

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Validate one address block; keys are `<prefix>.street`, `<prefix>.city`,
/// `<prefix>.zip_code`.
pub fn validate_address(address: &Address, prefix: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if address.street.trim().is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.street"),
            "Street address is required",
        ));
    }
    if address.city.trim().is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.city"),
            "City is required",
        ));
    }

    let zip = address.zip_code.trim();
    if zip.is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.zip_code"),
            "ZIP code is required",
        ));
    } else if !ZIP_RE.is_match(zip) {
        errors.push(FieldError::new(
            format!("{prefix}.zip_code"),
            "ZIP code must be 6 digits",
        ));
    }

    errors
}

/// Weight and description rules for the package step.
///
/// Weight is optional; when present it must be a positive finite number not
/// exceeding the selected tier's maximum. The description is required to
/// proceed even though the stored type marks it optional.
pub fn validate_package(
    size: PackageSize,
    weight: Option<f64>,
    description: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let spec = size.spec();

    if let Some(weight) = weight {
        if !weight.is_finite() || weight <= 0.0 {
            errors.push(FieldError::new("weight", "Please enter a valid weight"));
        } else if weight > spec.max_weight_kg as f64 {
            errors.push(FieldError::new(
                "weight",
                format!(
                    "Weight exceeds maximum limit of {} kg for {} package",
                    spec.max_weight_kg, spec.name
                ),
            ));
        }
    }

    if description.trim().is_empty() {
        errors.push(FieldError::new(
            "description",
            "Package description is required",
        ));
    }

    errors
}

/// Contact rules for the checkout step: trimmed name of at least three
/// letters-and-spaces characters, a ten-digit Indian mobile number, and a
/// loosely shaped email address.
pub fn validate_contact(user: &UserDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name = user.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new("name", "Full name is required"));
    } else if name.chars().count() < 3 {
        errors.push(FieldError::new(
            "name",
            "Name must be at least 3 characters long",
        ));
    } else if !NAME_RE.is_match(&user.name) {
        errors.push(FieldError::new(
            "name",
            "Name can only contain letters and spaces",
        ));
    }

    if user.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    } else {
        let digits: String = user
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !PHONE_RE.is_match(&digits) {
            errors.push(FieldError::new(
                "phone",
                "Please enter a valid 10-digit Indian mobile number",
            ));
        }
    }

    if user.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email address is required"));
    } else if !EMAIL_RE.is_match(&user.email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    errors
}
