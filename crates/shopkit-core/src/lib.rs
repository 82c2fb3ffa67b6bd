//! # shopkit-core: Pure Logic for shopkit
//!
//! This crate holds every piece of shopkit that can be computed without
//! touching the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopkit-services (async)                       │   │
//! │  │  Pricing, Shipping, Pages, Checkout, Accounts, Schedule         │   │
//! │  │  Each talks to ONE collaborator through a port trait            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopkit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ discount  │  │   stack   │  │ validation│  │   │
//! │  │   │  Coupon   │  │  coupons  │  │  Stack<T> │  │  username │  │   │
//! │  │   │  Order    │  │  lookup   │  │   LIFO    │  │  age/drive│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (Coupon, Order, ChargeResult, ...) and `Outcome<T>`
//! - [`error`] - Domain error types
//! - [`discount`] - Coupon table and discount calculation
//! - [`validation`] - Predicates and signal-by-value checks
//! - [`stack`] - LIFO container
//! - [`numeric`] - max, fizz-buzz, average, factorial
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::discount::calculate_discount;
//! use shopkit_core::{Outcome, Stack};
//!
//! assert_eq!(calculate_discount(10.0, Some("SAVE10")), Outcome::Value(9.0));
//!
//! let mut stack = Stack::new();
//! stack.push("receipt");
//! assert_eq!(stack.pop(), Ok("receipt"));
//! assert!(stack.pop().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod numeric;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopkit_core::Stack` instead of
// `use shopkit_core::stack::Stack`

pub use error::{CoreError, CoreResult, ValidationError};
pub use stack::Stack;
pub use types::*;
