//! # Coupons & Discounts
//!
//! The coupon table is fixed at compile time and handed out as fresh
//! [`Coupon`] records on every call.
//!
//! ## Lookup Flow
//! ```text
//! calculate_discount(price, code)
//!      │
//!      ├── price NaN / infinite? ──► Invalid("Invalid price: ...")
//!      ├── price < 0?            ──► Invalid("Invalid price: ...")
//!      ├── code missing?         ──► Invalid("Invalid discount code: ...")
//!      │
//!      ├── code in COUPONS?      ──► Value(price × (1 - discount))
//!      └── unknown code          ──► Value(price)
//! ```

use crate::error::ValidationError;
use crate::types::{Coupon, Outcome};

/// Known codes and the fraction each takes off.
const COUPONS: [(&str, f64); 2] = [("SAVE10", 0.10), ("SAVE20", 0.20)];

/// Returns every available coupon.
pub fn get_coupons() -> Vec<Coupon> {
    COUPONS
        .iter()
        .map(|&(code, discount)| Coupon::new(code, discount))
        .collect()
}

/// Applies a discount code to a price.
///
/// Codes match exactly (case-sensitive). An unknown code is not an error:
/// the price comes back unchanged.
///
/// ## Example
/// ```rust
/// use shopkit_core::discount::calculate_discount;
/// use shopkit_core::Outcome;
///
/// assert_eq!(calculate_discount(10.0, Some("SAVE20")), Outcome::Value(8.0));
/// assert_eq!(calculate_discount(10.0, Some("FOOBAR")), Outcome::Value(10.0));
/// assert!(calculate_discount(10.0, None).is_invalid());
/// ```
pub fn calculate_discount(price: f64, code: Option<&str>) -> Outcome<f64> {
    if !price.is_finite() {
        return ValidationError::PriceNotANumber.into();
    }

    if price < 0.0 {
        return ValidationError::NegativePrice { price }.into();
    }

    let Some(code) = code else {
        return ValidationError::MissingDiscountCode.into();
    };

    let discount = COUPONS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(0.0, |&(_, discount)| discount);

    Outcome::Value(price * (1.0 - discount))
}
