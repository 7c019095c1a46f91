//! Core record and filter type definitions.
//!
//! Defines [`Recommendation`] (one relationship record, matching the
//! `recommendations` table schema and the kebab-case wire contract),
//! [`RelationshipType`] (the closed type enumeration used at the API
//! boundary), and the optional-filter structs passed to search and delete.

use serde::{Deserialize, Serialize};

/// One directed recommendation relationship.
///
/// The ordered `(product_id, related_product_id)` pair is the record's
/// identity. Serialized field names are the external wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The subject product.
    #[serde(rename = "product-id")]
    pub product_id: i64,
    /// The recommended counterpart product.
    #[serde(rename = "related-product-id")]
    pub related_product_id: i64,
    /// Relationship type code. The store treats this as an opaque integer;
    /// the closed 1..=3 range is a boundary contract, not a store invariant.
    #[serde(rename = "type-id")]
    pub type_id: i64,
    /// `true` = active, `false` = inactive.
    pub status: bool,
}

/// The closed relationship type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    /// A pricier variant of the subject product.
    UpSell,
    /// A complementary product from another category.
    CrossSell,
    /// An add-on for the subject product.
    Accessory,
}

impl RelationshipType {
    /// The integer code stored in `type_id`.
    pub fn code(&self) -> i64 {
        match self {
            Self::UpSell => 1,
            Self::CrossSell => 2,
            Self::Accessory => 3,
        }
    }

    /// Decode a `type_id` column value, if it is one of the known codes.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::UpSell),
            2 => Some(Self::CrossSell),
            3 => Some(Self::Accessory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpSell => "up-sell",
            Self::CrossSell => "cross-sell",
            Self::Accessory => "accessory",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional search criteria, AND-combined. All-`None` matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub product_id: Option<i64>,
    pub related_product_id: Option<i64>,
    pub type_id: Option<i64>,
    pub status: Option<bool>,
}

/// Secondary criteria for a partial-key delete, AND-combined with the
/// required product id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteFilter {
    pub type_id: Option<i64>,
    pub status: Option<bool>,
}
