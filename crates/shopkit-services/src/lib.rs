//! # shopkit-services: Collaborator-Facing Services
//!
//! Each service wraps exactly one external capability and applies a little
//! branching to its answer.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Service Layer                                    │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ PricingService │  │ShippingService │  │  CheckoutService       │    │
//! │  │                │  │                │  │                        │    │
//! │  │ price × rate   │  │ quote → text   │  │ charge → OrderOutcome  │    │
//! │  └───────┬────────┘  └───────┬────────┘  └───────────┬────────────┘    │
//! │          ▼                   ▼                       ▼                  │
//! │    ExchangeRates       ShippingQuotes          PaymentGateway          │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  PageService   │  │ AccountService │  │  ScheduleService       │    │
//! │  │                │  │                │  │                        │    │
//! │  │ render + track │  │ sign-up, login │  │ opening hours, holiday │    │
//! │  └───────┬────────┘  └───────┬────────┘  └───────────┬────────────┘    │
//! │          ▼                   ▼                       ▼                  │
//! │      Analytics        Mailer + SecurityCodes       Clock               │
//! │                                                                         │
//! │  Ports live in [`ports`]; tests swap them for mockall doubles.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`ports`] - Collaborator traits and stock implementations
//! - [`config`] - Shop configuration (hours, promotions, pages)
//! - [`error`] - Service error types
//! - [`logging`] - Tracing subscriber setup
//! - [`pricing`], [`shipping`], [`pages`], [`checkout`], [`accounts`],
//!   [`schedule`] - The services
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shopkit_services::{ScheduleService, ShopConfig, SystemClock};
//!
//! let config = ShopConfig::default();
//! let schedule = ScheduleService::with_config(Arc::new(SystemClock), &config);
//!
//! let discount = schedule.get_discount();
//! assert!(discount == 0.0 || discount == config.promotions.holiday_discount);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod logging;
pub mod ports;

pub mod accounts;
pub mod checkout;
pub mod pages;
pub mod pricing;
pub mod schedule;
pub mod shipping;

// =============================================================================
// Re-exports
// =============================================================================

pub use accounts::AccountService;
pub use checkout::CheckoutService;
pub use config::{HoursSettings, PageSettings, PromotionSettings, ShopConfig};
pub use error::{ServiceError, ServiceResult};
pub use pages::PageService;
pub use ports::{
    Analytics, Clock, ExchangeRates, Mailer, NoOpAnalytics, PaymentGateway, RandomSecurityCodes,
    SecurityCodes, ShippingQuotes, SystemClock,
};
pub use pricing::PricingService;
pub use schedule::ScheduleService;
pub use shipping::ShippingService;
