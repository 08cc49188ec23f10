//! Draft validation against the data-model constraints
//!
//! Validation runs on submit. Every violated field reports its own message;
//! a draft with any violation never reaches the store.

use crate::core::customer::{CustomerDetails, MAX_ADDRESSES};
use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::FieldFormat;

/// Validate submitted customer details against the data-model constraints.
///
/// Returns `ValidationError::FieldErrors` carrying one entry per violated
/// field, named by its serialized path (`fullName`, `addresses[0].postcode`).
pub fn validate_details(details: &CustomerDetails) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if details.pan.is_empty() {
        field_error(&mut errors, "pan", "PAN is required");
    } else if !FieldFormat::Pan.matches(&details.pan) {
        field_error(&mut errors, "pan", "invalid PAN format");
    }

    let name_len = details.full_name.chars().count();
    if name_len == 0 {
        field_error(&mut errors, "fullName", "full name is required");
    } else if name_len > 140 {
        field_error(&mut errors, "fullName", "full name cannot exceed 140 characters");
    }

    if details.email.is_empty() {
        field_error(&mut errors, "email", "email is required");
    } else if details.email.chars().count() > 255 {
        field_error(&mut errors, "email", "email cannot exceed 255 characters");
    } else if !FieldFormat::Email.matches(&details.email) {
        field_error(&mut errors, "email", "invalid email format");
    }

    if details.mobile.is_empty() {
        field_error(&mut errors, "mobile", "mobile number is required");
    } else if !FieldFormat::Mobile.matches(&details.mobile) {
        field_error(&mut errors, "mobile", "mobile number must be 10 digits");
    }

    if details.addresses.is_empty() {
        field_error(&mut errors, "addresses", "at least one address is required");
    } else if details.addresses.len() > MAX_ADDRESSES {
        field_error(&mut errors, "addresses", "no more than 10 addresses are allowed");
    }

    for (index, address) in details.addresses.iter().enumerate() {
        if address.address_line1.trim().is_empty() {
            field_error(
                &mut errors,
                &format!("addresses[{}].addressLine1", index),
                "address line 1 is required",
            );
        }
        if address.postcode.is_empty() {
            field_error(
                &mut errors,
                &format!("addresses[{}].postcode", index),
                "postcode is required",
            );
        } else if !FieldFormat::Postcode.matches(&address.postcode) {
            field_error(
                &mut errors,
                &format!("addresses[{}].postcode", index),
                "postcode must be 6 digits",
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}

fn field_error(errors: &mut Vec<FieldValidationError>, field: &str, message: &str) {
    errors.push(FieldValidationError {
        field: field.to_string(),
        message: message.to_string(),
    });
}
