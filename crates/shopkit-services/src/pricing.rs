//! Price conversion into foreign currencies.

use std::sync::Arc;

use tracing::debug;

use crate::ports::ExchangeRates;

/// Converts store prices using the injected rate source.
pub struct PricingService {
    rates: Arc<dyn ExchangeRates>,
}

impl PricingService {
    pub fn new(rates: Arc<dyn ExchangeRates>) -> Self {
        PricingService { rates }
    }

    /// `price` expressed in `currency`.
    pub fn get_price_in_currency(&self, price: f64, currency: &str) -> f64 {
        let rate = self.rates.exchange_rate(currency);
        debug!(currency, rate, "Looked up exchange rate");
        price * rate
    }
}
