//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkit-core errors (this file)                                       │
//! │  ├── CoreError        - Fail-fast errors (raised, matched by variant)  │
//! │  └── ValidationError  - Signal-by-value messages (returned in Outcome) │
//! │                                                                         │
//! │  shopkit-services errors (separate crate)                              │
//! │  └── ServiceError     - Collaborator and configuration failures        │
//! │                                                                         │
//! │  Flow: CoreError → ServiceError → caller                               │
//! │        ValidationError → Outcome::Invalid(message) → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Idioms, On Purpose
//! `ValidationError` is never returned through `Err`. Its `Display` output is
//! the message callers match on ("Invalid price", "Invalid age", ...), so the
//! leading keywords below are a stable contract.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An element was requested from an empty collection.
    ///
    /// ## When This Occurs
    /// - `Stack::pop` on an empty stack
    /// - `Stack::peek` on an empty stack
    #[error("Cannot {operation} an empty collection")]
    EmptyCollection { operation: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures, rendered into `Outcome::Invalid` messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Price is not a finite number.
    #[error("Invalid price: must be a number")]
    PriceNotANumber,

    /// Price is below zero.
    #[error("Invalid price: {price} is negative")]
    NegativePrice { price: f64 },

    /// Discount code was not supplied.
    #[error("Invalid discount code: a code is required")]
    MissingDiscountCode,

    /// Username is missing or its length is out of bounds.
    #[error("Invalid username: must be between {min} and {max} characters")]
    Username { min: usize, max: usize },

    /// Age is not a number or outside the accepted range.
    #[error("Invalid age: must be between {min} and {max}")]
    Age { min: u32, max: u32 },

    /// Country has no driving-age rule.
    #[error("Invalid country code: {code}")]
    UnsupportedCountry { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
