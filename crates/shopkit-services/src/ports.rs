//! # Collaborator Ports
//!
//! One trait per external capability. Services hold them as
//! `Arc<dyn Trait>`, so production wiring and test doubles are
//! interchangeable.
//!
//! ## Port Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Collaborator Ports                              │
//! │                                                                         │
//! │  Port             Method                         Stock impl             │
//! │  ───────────────  ─────────────────────────────  ─────────────────────  │
//! │  ExchangeRates    exchange_rate(currency)        -                      │
//! │  ShippingQuotes   shipping_quote(destination)    -                      │
//! │  Analytics        track_page_view(page)          NoOpAnalytics          │
//! │  PaymentGateway   charge(card, amount)    async  -                      │
//! │  Mailer           send_email(to, body)    async  -                      │
//! │  SecurityCodes    generate_code()                RandomSecurityCodes    │
//! │  Clock            now()                          SystemClock            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Under `cfg(test)` every port also gets a `mockall` double
//! (`MockExchangeRates`, `MockClock`, ...).

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use shopkit_core::{ChargeResult, CreditCard, ShippingQuote};

use crate::error::ServiceResult;

// =============================================================================
// Synchronous Ports
// =============================================================================

/// Currency conversion rates.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeRates: Send + Sync {
    /// Multiplier from the store currency into `currency`.
    fn exchange_rate(&self, currency: &str) -> f64;
}

/// Shipping quote lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ShippingQuotes: Send + Sync {
    /// Returns `None` when the destination cannot be served.
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Fire-and-forget analytics tracker.
#[cfg_attr(test, mockall::automock)]
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, page: &str);
}

/// One-time numeric code generator.
#[cfg_attr(test, mockall::automock)]
pub trait SecurityCodes: Send + Sync {
    fn generate_code(&self) -> u32;
}

/// Wall clock, in local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

// =============================================================================
// Asynchronous Ports
// =============================================================================

/// Card payment processor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `card`.
    ///
    /// A declined charge is `Ok` with a failed status; `Err` means the
    /// gateway could not be reached or answered garbage.
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeResult>;
}

/// Outgoing mail transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, to: &str, body: &str) -> ServiceResult<()>;
}

// =============================================================================
// Stock Implementations
// =============================================================================

/// Reads the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Analytics sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAnalytics;

impl Analytics for NoOpAnalytics {
    fn track_page_view(&self, _page: &str) {}
}

/// Six-digit codes from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecurityCodes;

impl RandomSecurityCodes {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;
}

impl SecurityCodes for RandomSecurityCodes {
    fn generate_code(&self) -> u32 {
        rand::rng().random_range(Self::MIN..=Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_have_six_digits() {
        let codes = RandomSecurityCodes;
        for _ in 0..100 {
            let code = codes.generate_code();
            assert_eq!(code.to_string().len(), 6, "{code}");
        }
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();

        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_no_op_analytics_accepts_any_page() {
        NoOpAnalytics.track_page_view("/home");
        NoOpAnalytics.track_page_view("");
    }
}
