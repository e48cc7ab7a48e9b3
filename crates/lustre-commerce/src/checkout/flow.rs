//! Checkout flow state machine.

use std::fmt;
use std::str::FromStr;

use crate::cart::{CartPricing, CartStore};
use crate::checkout::{OrderConfirmation, OrderGateway, OrderRequest, ShippingAddress};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Delivery address.
    #[default]
    Address,
    /// Payment method and order review.
    Payment,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "address",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "Delivery Address",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Order Placed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// UPI apps.
    #[default]
    Upi,
    /// Credit or debit card.
    Card,
    /// Net banking.
    NetBanking,
    /// Prepaid wallets.
    Wallet,
}

impl PaymentMethod {
    /// All payment methods in the order they are offered.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::NetBanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "Pay using any UPI app",
            PaymentMethod::Card => "Visa, Mastercard, Rupay",
            PaymentMethod::NetBanking => "All major banks supported",
            PaymentMethod::Wallet => "Paytm, PhonePe, Amazon Pay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown payment method: {}", s)))
    }
}

/// Checkout flow state.
///
/// Address, then payment, then a placed order. Pricing always comes from the
/// live cart, so the summary tracks cart edits made mid-checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Accepted delivery address.
    pub address: Option<ShippingAddress>,
    /// Selected payment method.
    pub payment: PaymentMethod,
    /// Set once the order is placed.
    pub confirmation: Option<OrderConfirmation>,
}

impl CheckoutFlow {
    /// Start a checkout at the address step with UPI preselected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the delivery address and advance to payment.
    ///
    /// Fails with `CheckoutIncomplete` naming the first blank field, leaving
    /// the flow where it was.
    pub fn submit_address(&mut self, address: ShippingAddress) -> Result<CheckoutStep, CommerceError> {
        self.ensure_open(CheckoutStep::Payment)?;
        address.validate()?;

        self.address = Some(address);
        self.step = CheckoutStep::Payment;
        tracing::debug!(step = self.step.as_str(), "checkout address accepted");
        Ok(self.step)
    }

    /// Choose how to pay.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Payment.as_str().to_string(),
            });
        }
        self.payment = method;
        Ok(())
    }

    /// Go back to the address step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        match self.step {
            CheckoutStep::Payment => {
                self.step = CheckoutStep::Address;
                Ok(self.step)
            }
            other => Err(CommerceError::InvalidCheckoutTransition {
                from: other.as_str().to_string(),
                to: CheckoutStep::Address.as_str().to_string(),
            }),
        }
    }

    /// Order summary for the current cart. Checkout never applies coupons.
    pub fn summary(&self, cart: &CartStore) -> CartPricing {
        cart.pricing(None)
    }

    /// Submit the order through `gateway`.
    ///
    /// On success the cart is cleared, the flow completes and the
    /// confirmation is returned. On failure the cart and flow are untouched.
    pub async fn place_order(
        &mut self,
        cart: &mut CartStore,
        gateway: &dyn OrderGateway,
    ) -> Result<OrderConfirmation, CommerceError> {
        self.ensure_open(CheckoutStep::Complete)?;
        let address = match (&self.address, self.step) {
            (Some(address), CheckoutStep::Payment) => address.clone(),
            _ => return Err(CommerceError::CheckoutIncomplete("shipping address".to_string())),
        };
        if cart.is_empty() {
            return Err(CommerceError::CheckoutIncomplete("cart items".to_string()));
        }

        let request = OrderRequest {
            items: cart.items().to_vec(),
            address,
            payment: self.payment,
            pricing: self.summary(cart),
        };

        let confirmation = gateway.submit(&request).await?;

        if let Err(e) = cart.clear_cart() {
            tracing::warn!(error = %e, "order placed but the emptied cart could not be saved");
        }
        self.step = CheckoutStep::Complete;
        self.confirmation = Some(confirmation.clone());

        tracing::info!(
            order_id = %confirmation.order_id,
            total = confirmation.pricing.total.amount,
            payment = confirmation.payment.as_str(),
            "order placed"
        );
        Ok(confirmation)
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 3.0) * 100.0).round() as u8
    }

    fn ensure_open(&self, to: CheckoutStep) -> Result<(), CommerceError> {
        if self.is_complete() {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }
}
