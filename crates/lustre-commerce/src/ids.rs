//! Newtype IDs for type-safe identifiers.
//!
//! Catalog IDs are plain strings in the dataset; the newtypes keep a category
//! slug from being passed where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(OrderId);

impl OrderId {
    /// Generate an order number: `FJ` followed by the last eight digits of
    /// the current Unix time in milliseconds.
    pub fn generate() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self::from_millis(millis)
    }

    fn from_millis(millis: u128) -> Self {
        Self(format!("FJ{:08}", millis % 100_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("12");
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn test_id_from_string() {
        let id: CategoryId = "rings".into();
        assert_eq!(id.as_str(), "rings");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("7")).unwrap();
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn test_order_id_format() {
        let id = OrderId::from_millis(1_718_000_123_456);
        assert_eq!(id.as_str(), "FJ00123456");

        let generated = OrderId::generate();
        assert!(generated.as_str().starts_with("FJ"));
        assert_eq!(generated.as_str().len(), 10);
    }
}
