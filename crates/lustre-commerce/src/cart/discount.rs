//! Coupon codes.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Codes the storefront accepts, with their percentage off the subtotal.
const COUPONS: &[(&str, i64)] = &[("FIRST10", 10)];

/// A redeemed coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Canonical (upper-case) code.
    pub code: String,
    /// Percentage off the subtotal.
    pub percent_off: i64,
}

impl Coupon {
    /// Redeem a code as typed by the shopper. Codes are matched
    /// case-insensitively after trimming.
    pub fn redeem(code: &str) -> Result<Self, CommerceError> {
        let normalized = code.trim().to_uppercase();
        COUPONS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(known, percent_off)| Coupon {
                code: (*known).to_string(),
                percent_off: *percent_off,
            })
            .ok_or_else(|| CommerceError::InvalidDiscountCode(code.trim().to_string()))
    }

    /// Discount on `subtotal`, rounded half-up to whole units and never more
    /// than the subtotal itself.
    pub fn discount_for(&self, subtotal: i64) -> i64 {
        if subtotal <= 0 {
            return 0;
        }
        let raw = subtotal.saturating_mul(self.percent_off).saturating_add(50) / 100;
        raw.clamp(0, subtotal)
    }
}
