//! Order submission types.

use crate::cart::{CartPricing, LineItem};
use crate::checkout::{PaymentMethod, ShippingAddress};
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Everything the gateway needs to place an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Snapshot of the cart at submission time.
    pub items: Vec<LineItem>,
    /// Delivery address.
    pub address: ShippingAddress,
    /// Chosen payment method.
    pub payment: PaymentMethod,
    /// Priced totals.
    pub pricing: CartPricing,
}

impl OrderRequest {
    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Order number shown to the shopper (`FJ` + 8 digits).
    pub order_id: OrderId,
    /// Number of units ordered.
    pub total_items: i64,
    /// Delivery address.
    pub address: ShippingAddress,
    /// Chosen payment method.
    pub payment: PaymentMethod,
    /// Priced totals.
    pub pricing: CartPricing,
}

impl OrderConfirmation {
    /// Accept a request under a freshly generated order number.
    pub fn accept(request: &OrderRequest) -> Self {
        Self::with_id(OrderId::generate(), request)
    }

    /// Accept a request under a known order number.
    pub fn with_id(order_id: OrderId, request: &OrderRequest) -> Self {
        Self {
            order_id,
            total_items: request.total_items(),
            address: request.address.clone(),
            payment: request.payment,
            pricing: request.pricing.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;
    use crate::checkout::sample_address;
    use crate::money::Currency;

    fn request() -> OrderRequest {
        let items = vec![
            LineItem {
                product: sample("1", 400),
                quantity: 2,
            },
            LineItem {
                product: sample("2", 150),
                quantity: 1,
            },
        ];
        OrderRequest {
            items,
            address: sample_address(),
            payment: PaymentMethod::Card,
            pricing: CartPricing::calculate(950, None, Currency::INR),
        }
    }

    #[test]
    fn test_request_totals() {
        let request = request();
        assert_eq!(request.total_items(), 3);
        assert_eq!(request.pricing.total.amount, 950 + 99);
    }

    #[test]
    fn test_accept() {
        let request = request();
        let confirmation = OrderConfirmation::accept(&request);
        assert!(confirmation.order_id.as_str().starts_with("FJ"));
        assert_eq!(confirmation.total_items, 3);
        assert_eq!(confirmation.payment, PaymentMethod::Card);
        assert_eq!(confirmation.pricing, request.pricing);

        let fixed = OrderConfirmation::with_id(OrderId::new("FJ00000001"), &request);
        assert_eq!(fixed.order_id.as_str(), "FJ00000001");
    }
}
