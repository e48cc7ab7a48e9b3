//! Cart pricing calculations.

use crate::cart::Coupon;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotals strictly above this ship for free.
pub const FREE_DELIVERY_THRESHOLD: i64 = 999;

/// Flat delivery charge below the free-delivery threshold.
pub const DELIVERY_FEE: i64 = 99;

/// Delivery charge for a given subtotal.
pub fn delivery_fee_for(subtotal: i64) -> i64 {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        0
    } else {
        DELIVERY_FEE
    }
}

/// Pricing breakdown shown in the cart and checkout summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Coupon discount.
    pub discount: Money,
    /// Delivery charge.
    pub delivery_fee: Money,
    /// Amount payable (subtotal - discount + delivery).
    pub total: Money,
    /// Code of the applied coupon, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
}

impl CartPricing {
    /// Price a subtotal with an optional coupon.
    pub fn calculate(subtotal: i64, coupon: Option<&Coupon>, currency: Currency) -> Self {
        let discount = coupon.map_or(0, |c| c.discount_for(subtotal));
        let delivery_fee = delivery_fee_for(subtotal);
        let total = subtotal
            .saturating_sub(discount)
            .saturating_add(delivery_fee);

        Self {
            subtotal: Money::new(subtotal, currency),
            discount: Money::new(discount, currency),
            delivery_fee: Money::new(delivery_fee, currency),
            total: Money::new(total, currency),
            coupon: coupon.map(|c| c.code.clone()),
        }
    }

    /// Check if a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Check if delivery is free.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}
