//! Shipping quotes rendered for the storefront.
//!
//! ```text
//! get_shipping_info("Paris")
//!      │
//!      ▼
//! ShippingQuotes::shipping_quote("Paris")
//!      │
//!      ├── None                 ──► "Shipping unavailable"
//!      └── Some({100, 2})       ──► "Shipping cost: $100 (2 days)"
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::ports::ShippingQuotes;

/// Message returned when no quote is available.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping unavailable";

/// Formats shipping quotes from the injected quote source.
pub struct ShippingService {
    quotes: Arc<dyn ShippingQuotes>,
}

impl ShippingService {
    pub fn new(quotes: Arc<dyn ShippingQuotes>) -> Self {
        ShippingService { quotes }
    }

    /// Human-readable shipping summary for `destination`.
    ///
    /// Integral costs print without a fractional part (`$100`, not `$100.0`).
    pub fn get_shipping_info(&self, destination: &str) -> String {
        match self.quotes.shipping_quote(destination) {
            Some(quote) => format!(
                "Shipping cost: ${} ({} days)",
                quote.cost, quote.estimated_days
            ),
            None => {
                debug!(destination, "No shipping quote available");
                SHIPPING_UNAVAILABLE.to_string()
            }
        }
    }
}
