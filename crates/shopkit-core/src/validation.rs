//! # Validation Module
//!
//! Input checks used at the edges of shopkit.
//!
//! ## Two Shapes of Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Shapes                                  │
//! │                                                                         │
//! │  Predicates (bool)                                                     │
//! │  ├── is_price_in_range   min <= price <= max                           │
//! │  ├── is_valid_username   5..=15 characters                             │
//! │  └── is_valid_email      local@domain.tld                              │
//! │                                                                         │
//! │  Signal-by-value (Outcome)                                             │
//! │  ├── validate_user_input Value("... successful") | Invalid("...")      │
//! │  └── can_drive           Value(bool)             | Invalid("...")      │
//! │                                                                         │
//! │  Invalid messages come from ValidationError's Display                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::validation::{can_drive, is_price_in_range};
//! use shopkit_core::Outcome;
//!
//! assert!(is_price_in_range(5.0, 5.0, 10.0));
//! assert_eq!(can_drive(16, "US"), Outcome::Value(true));
//! assert!(can_drive(30, "RU").is_invalid());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::Outcome;

/// Username length bounds for `validate_user_input`.
pub const USER_INPUT_NAME_MIN: usize = 3;
pub const USER_INPUT_NAME_MAX: usize = 255;

/// Age bounds for `validate_user_input`.
pub const USER_INPUT_AGE_MIN: u32 = 18;
pub const USER_INPUT_AGE_MAX: u32 = 105;

/// Username length bounds for `is_valid_username`.
pub const USERNAME_MIN: usize = 5;
pub const USERNAME_MAX: usize = 15;

/// Minimum driving age per supported country code.
const DRIVING_AGES: [(&str, i32); 2] = [("US", 16), ("UK", 17)];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

// =============================================================================
// Predicates
// =============================================================================

/// True iff `min <= price <= max`.
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

/// True iff a username was supplied and is 5 to 15 characters long.
///
/// Length counts characters, not bytes.
pub fn is_valid_username(name: Option<&str>) -> bool {
    name.is_some_and(|name| {
        (USERNAME_MIN..=USERNAME_MAX).contains(&name.chars().count())
    })
}

/// True iff `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// =============================================================================
// Signal-by-value Checks
// =============================================================================

/// Validates a sign-up form.
///
/// ## Rules
/// - Username present, 3 to 255 characters
/// - Age a finite number between 18 and 105
///
/// Every failing rule contributes its own message, so a form with a bad
/// username AND a bad age mentions both.
pub fn validate_user_input(username: Option<&str>, age: f64) -> Outcome<String> {
    let mut errors = Vec::new();

    let name_ok = username.is_some_and(|name| {
        (USER_INPUT_NAME_MIN..=USER_INPUT_NAME_MAX).contains(&name.chars().count())
    });
    if !name_ok {
        errors.push(ValidationError::Username {
            min: USER_INPUT_NAME_MIN,
            max: USER_INPUT_NAME_MAX,
        });
    }

    let age_ok = age.is_finite()
        && age >= f64::from(USER_INPUT_AGE_MIN)
        && age <= f64::from(USER_INPUT_AGE_MAX);
    if !age_ok {
        errors.push(ValidationError::Age {
            min: USER_INPUT_AGE_MIN,
            max: USER_INPUT_AGE_MAX,
        });
    }

    if errors.is_empty() {
        Outcome::Value("Validation successful".to_string())
    } else {
        Outcome::from_errors(&errors)
    }
}

/// Checks whether someone of `age` may drive in `country_code`.
///
/// Country codes match exactly ("us" is not "US"). A negative age is simply
/// too young, not invalid input.
pub fn can_drive(age: i32, country_code: &str) -> Outcome<bool> {
    match DRIVING_AGES.iter().find(|(code, _)| *code == country_code) {
        Some(&(_, min_age)) => Outcome::Value(age >= min_age),
        None => ValidationError::UnsupportedCountry {
            code: country_code.to_string(),
        }
        .into(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
