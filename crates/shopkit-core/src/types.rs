//! # Domain Types
//!
//! Records exchanged between shopkit and its collaborators.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Coupon      │   │  ShippingQuote  │   │  ChargeResult   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  cost           │   │  status         │       │
//! │  │  discount 0..1  │   │  estimated_days │   │  Success/Failed │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │   CreditCard    │   │  OrderOutcome   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  total_amount   │   │  card number    │   │  success        │       │
//! │  └─────────────────┘   └─────────────────┘   │  error?         │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Outcome<T> = Value(T) | Invalid(message)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record here is transient: built for one call and dropped after it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

// =============================================================================
// Outcome
// =============================================================================

/// Result of a total function that reports bad input by value.
///
/// ## Why Not `Result`?
/// Callers of `calculate_discount`, `validate_user_input` and `can_drive`
/// match on the message text ("invalid ...") rather than on an error type.
/// `Outcome` keeps those functions total while still letting Rust callers
/// branch on the tag.
///
/// ## Example
/// ```rust
/// use shopkit_core::discount::calculate_discount;
///
/// let outcome = calculate_discount(-10.0, Some("SAVE10"));
/// assert!(outcome.is_invalid());
/// assert!(outcome.to_string().to_lowercase().contains("invalid"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Input was accepted.
    Value(T),
    /// Input was rejected; the message contains the word "Invalid".
    Invalid(String),
}

impl<T> Outcome<T> {
    /// Returns true if the input was rejected.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// Returns the accepted value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    /// Consumes the outcome, returning the accepted value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    /// Returns the rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Invalid(message) => Some(message),
        }
    }

    /// Builds an `Invalid` outcome from several failures, joined with ", ".
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Outcome::Invalid(message)
    }
}

impl<T> From<ValidationError> for Outcome<T> {
    fn from(err: ValidationError) -> Self {
        Outcome::Invalid(err.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{}", value),
            Outcome::Invalid(message) => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount code and the fraction it takes off the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Code typed at checkout (case-sensitive).
    pub code: String,

    /// Fraction of the price removed, between 0 and 1.
    pub discount: f64,
}

impl Coupon {
    /// Creates a coupon.
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Coupon {
            code: code.into(),
            discount,
        }
    }

    /// Checks the record invariants: non-empty code, discount in [0, 1].
    pub fn is_well_formed(&self) -> bool {
        !self.code.is_empty() && (0.0..=1.0).contains(&self.discount)
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A quote returned by the shipping collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    /// Shipping cost in the store currency.
    pub cost: f64,

    /// Estimated delivery time in days.
    pub estimated_days: u32,
}

// =============================================================================
// Payments
// =============================================================================

/// Status reported by the payment collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// Card was charged.
    Success,
    /// Charge was declined or errored.
    Failed,
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeStatus::Success => write!(f, "success"),
            ChargeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    /// A successful charge.
    pub const fn success() -> Self {
        ChargeResult {
            status: ChargeStatus::Success,
        }
    }

    /// A failed charge.
    pub const fn failed() -> Self {
        ChargeResult {
            status: ChargeStatus::Failed,
        }
    }
}

/// An order awaiting payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total_amount: f64,
}

/// Card details, passed through to the payment collaborator untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub credit_card_number: String,
}

/// What `submit_order` reports back to the caller.
///
/// Serializes as `{"success": true}` or
/// `{"success": false, "error": "payment_error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderOutcome {
    /// Error code used for every non-successful charge.
    pub const PAYMENT_ERROR: &'static str = "payment_error";

    /// Order was paid.
    pub fn paid() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    /// Payment did not go through.
    pub fn payment_failed() -> Self {
        OrderOutcome {
            success: false,
            error: Some(Self::PAYMENT_ERROR.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let ok: Outcome<f64> = Outcome::Value(9.0);
        assert_eq!(ok.to_string(), "9");

        let bad: Outcome<f64> = ValidationError::PriceNotANumber.into();
        assert_eq!(bad.to_string(), "Invalid price: must be a number");
        assert!(bad.is_invalid());
        assert_eq!(bad.value(), None);
    }

    #[test]
    fn test_outcome_from_errors_joins_messages() {
        let outcome: Outcome<String> = Outcome::from_errors(&[
            ValidationError::Username { min: 3, max: 255 },
            ValidationError::Age { min: 18, max: 105 },
        ]);
        let message = outcome.message().unwrap();
        assert!(message.contains("Invalid username"));
        assert!(message.contains(", Invalid age"));
    }

    #[test]
    fn test_coupon_well_formed() {
        assert!(Coupon::new("SAVE10", 0.1).is_well_formed());
        assert!(Coupon::new("FREE", 1.0).is_well_formed());
        assert!(!Coupon::new("", 0.1).is_well_formed());
        assert!(!Coupon::new("TOO-MUCH", 1.5).is_well_formed());
        assert!(!Coupon::new("NEGATIVE", -0.1).is_well_formed());
    }

    #[test]
    fn test_order_outcome_serialization() {
        let paid = serde_json::to_value(OrderOutcome::paid()).unwrap();
        assert_eq!(paid, serde_json::json!({ "success": true }));

        let failed = serde_json::to_value(OrderOutcome::payment_failed()).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }

    #[test]
    fn test_charge_status_serialization() {
        let json = serde_json::to_string(&ChargeResult::failed()).unwrap();
        assert_eq!(json, r#"{"status":"failed"}"#);

        let parsed: ChargeResult = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(parsed, ChargeResult::success());
    }
}
