//! Order submission port.

use std::time::Duration;

use async_trait::async_trait;

use crate::checkout::{OrderConfirmation, OrderRequest};
use crate::error::CommerceError;

/// Backend that places orders.
///
/// Submission is the storefront's only suspension point. Once started it runs
/// to completion; callers must not drop the future midway.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Place an order.
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, CommerceError>;
}

/// Processing time of the simulated gateway.
#[cfg(any(test, feature = "simulated"))]
pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Gateway that accepts every order after a fixed delay.
#[cfg(any(test, feature = "simulated"))]
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

#[cfg(any(test, feature = "simulated"))]
impl SimulatedGateway {
    /// Create a gateway with the given processing delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a gateway that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Processing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(any(test, feature = "simulated"))]
impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

#[cfg(any(test, feature = "simulated"))]
#[async_trait]
impl OrderGateway for SimulatedGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, CommerceError> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            items = request.items.len(),
            "simulating order submission"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(OrderConfirmation::accept(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartPricing, LineItem};
    use crate::catalog::sample;
    use crate::checkout::{sample_address, PaymentMethod};
    use crate::money::Currency;
    use std::time::Instant;

    fn request() -> OrderRequest {
        OrderRequest {
            items: vec![LineItem {
                product: sample("1", 2000),
                quantity: 1,
            }],
            address: sample_address(),
            payment: PaymentMethod::Upi,
            pricing: CartPricing::calculate(2000, None, Currency::INR),
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedGateway::default().delay(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_instant_gateway_accepts() {
        let gateway = SimulatedGateway::instant();
        let confirmation = gateway.submit(&request()).await.unwrap();
        assert_eq!(confirmation.total_items, 1);
        assert_eq!(confirmation.pricing.total.amount, 2000);
    }

    #[tokio::test]
    async fn test_gateway_waits_for_delay() {
        let gateway = SimulatedGateway::new(Duration::from_millis(20));
        let started = Instant::now();
        gateway.submit(&request()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
