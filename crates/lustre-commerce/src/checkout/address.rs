//! Shipping address and delivery availability.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Estimate reported for any serviceable pincode.
pub const STANDARD_DELIVERY_WINDOW: &str = "3-5 business days";

/// Length of an Indian postal code.
pub const PINCODE_LENGTH: usize = 6;

/// Delivery address collected in the first checkout step.
///
/// Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingAddress {
    /// Recipient's full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
}

impl ShippingAddress {
    /// Field names in form order.
    pub const FIELDS: [&'static str; 7] =
        ["name", "phone", "email", "street", "city", "state", "pincode"];

    fn values(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.pincode.as_str(),
        ]
    }

    /// Name of the first field that is blank after trimming.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .find(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }

    /// Fail with `CheckoutIncomplete` naming the first blank field.
    pub fn validate(&self) -> Result<(), CommerceError> {
        match self.first_missing_field() {
            Some(field) => Err(CommerceError::CheckoutIncomplete(field.to_string())),
            None => Ok(()),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.street.trim(),
            self.city.trim(),
            self.state.trim(),
            self.pincode.trim()
        )
    }

    /// Format as multi-line, the way it is printed on the order summary.
    pub fn multi_line(&self) -> String {
        [
            self.name.trim().to_string(),
            self.street.trim().to_string(),
            format!("{}, {} {}", self.city.trim(), self.state.trim(), self.pincode.trim()),
            format!("{} | {}", self.phone.trim(), self.email.trim()),
        ]
        .join("\n")
    }
}

/// Result of a delivery availability check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryEstimate {
    /// The pincode that was checked, trimmed.
    pub pincode: String,
    /// Human-readable delivery window.
    pub window: String,
}

/// Check whether a pincode can be delivered to.
///
/// Any six-character pincode is serviceable.
pub fn check_delivery(pincode: &str) -> Result<DeliveryEstimate, CommerceError> {
    let pincode = pincode.trim();
    if pincode.chars().count() != PINCODE_LENGTH {
        return Err(CommerceError::ValidationError(format!(
            "pincode must be {} characters, got {:?}",
            PINCODE_LENGTH, pincode
        )));
    }

    Ok(DeliveryEstimate {
        pincode: pincode.to_string(),
        window: STANDARD_DELIVERY_WINDOW.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn sample_address() -> ShippingAddress {
    ShippingAddress {
        name: "Asha Rao".to_string(),
        phone: "9876543210".to_string(),
        email: "asha@example.in".to_string(),
        street: "12 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pincode: "560001".to_string(),
    }
}
