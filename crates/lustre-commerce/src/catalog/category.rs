//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category shown on the home page and in listing filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier, also the URL slug.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category image URL.
    pub image: String,
    /// Advertised number of designs in the category.
    pub product_count: u32,
}
