//! Checkout module.
//!
//! Contains the checkout flow, delivery address, order types, and the order
//! gateway port.

mod address;
mod flow;
mod gateway;
mod order;

pub use address::{
    check_delivery, DeliveryEstimate, ShippingAddress, PINCODE_LENGTH, STANDARD_DELIVERY_WINDOW,
};
pub use flow::{CheckoutFlow, CheckoutStep, PaymentMethod};
pub use gateway::OrderGateway;
#[cfg(any(test, feature = "simulated"))]
pub use gateway::{SimulatedGateway, SIMULATED_DELAY};
pub use order::{OrderConfirmation, OrderRequest};

#[cfg(test)]
pub(crate) use address::sample_address;
