//! User record models for the wire and the API.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Incoming user record as posted to `POST /api/users`.
///
/// Every field is optional on the wire; absent fields deserialize as empty
/// strings and are caught by validation rather than by the decoder.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    /// First name
    #[serde(default)]
    #[validate(length(min = 1, message = "first name must not be empty"))]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    #[validate(length(min = 1, message = "last name must not be empty"))]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Phone number
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone_number: String,
    /// Date of birth in `YYYY-MM-DD` form (checked separately from the
    /// field rules, see `time_utils::parse_dob`)
    #[serde(default)]
    pub dob: String,
    /// Free-text postal address, accepted as-is
    #[serde(default)]
    pub address: String,
}

impl NewUser {
    /// First and last name joined by a single space, exactly as submitted.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Permissive international phone shape: optional leading `+`, digits grouped
/// by spaces, dashes, dots or parentheses, 7 to 15 digits total.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0usize;
    for c in rest.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => {
                return Err(ValidationError::new("invalid_phone").with_message(
                    "phone number may only contain digits, spaces, dashes, dots and parentheses"
                        .into(),
                ))
            }
        }
    }
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::new("invalid_phone")
            .with_message("phone number must contain 7 to 15 digits".into()));
    }
    Ok(())
}

/// Response body for a successfully created user.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    /// Store-generated identifier
    pub id: i64,
    /// First and last name joined by one space
    pub full_name: String,
    /// Email address as submitted
    pub email: String,
}
