//! # Checkout
//!
//! Turns a charge attempt into an order outcome.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_order(order, card)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentGateway::charge(card, order.total_amount)                       │
//! │       │                                                                 │
//! │       ├── Err(e)            ──► Err(e)            (passed through)      │
//! │       ├── Ok(Success)       ──► {success: true}                         │
//! │       └── Ok(Failed)        ──► {success: false, error: payment_error}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use shopkit_core::{ChargeStatus, CreditCard, Order, OrderOutcome};
use tracing::{info, warn};

use crate::error::ServiceResult;
use crate::ports::PaymentGateway;

/// Submits orders to the injected payment gateway.
pub struct CheckoutService {
    payments: Arc<dyn PaymentGateway>,
}

impl CheckoutService {
    pub fn new(payments: Arc<dyn PaymentGateway>) -> Self {
        CheckoutService { payments }
    }

    /// Charges the card for the order total.
    ///
    /// A declined charge is reported in the returned [`OrderOutcome`]; only
    /// gateway failures come back as `Err`.
    pub async fn submit_order(&self, order: &Order, card: &CreditCard) -> ServiceResult<OrderOutcome> {
        let result = self.payments.charge(card, order.total_amount).await?;

        match result.status {
            ChargeStatus::Success => {
                info!(amount = order.total_amount, "Order paid");
                Ok(OrderOutcome::paid())
            }
            ChargeStatus::Failed => {
                warn!(amount = order.total_amount, status = %result.status, "Payment declined");
                Ok(OrderOutcome::payment_failed())
            }
        }
    }
}
