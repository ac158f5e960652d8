//! # Domain Types
//!
//! Core domain types shared by the catalog, the query engine and the ledger.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   FacetFilter   │   │    SortMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │   │  Any            │   │  Featured       │       │
//! │  │  name           │   │  Exactly(value) │   │  PriceAscending │       │
//! │  │  price (Money)  │   └─────────────────┘   │  PriceDescending│       │
//! │  │  category       │                         └─────────────────┘       │
//! │  │  skin_type      │                                                    │
//! │  │  featured       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog-unique, positive product identifier.
///
/// Ids are assigned with the catalog and never reused, so a ledger entry
/// keyed by a `ProductId` keeps resolving for the life of the session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    /// Parses the id a button carries in its `data-id` attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProductId)
            .map_err(|_| ValidationError::MustBePositive {
                field: "product id".to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name; the search box matches against it.
    pub name: String,

    /// Short marketing copy shown on the card and in the detail view.
    pub description: String,

    /// Unit price in whole currency units.
    pub price: Money,

    /// Catalog category (Serums, Hidratantes, ...).
    pub category: String,

    /// Skin type the product targets (Seca, Grasa, ...).
    pub skin_type: String,

    /// Featured products sort first under the default ordering.
    pub featured: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        category: impl Into<String>,
        skin_type: impl Into<String>,
        featured: bool,
    ) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            description: description.into(),
            price: Money::from_units(price),
            category: category.into(),
            skin_type: skin_type.into(),
            featured,
        }
    }
}

// =============================================================================
// Facet Filter
// =============================================================================

/// Constraint on one product facet (category or skin type).
///
/// `Any` replaces the "all" option of the select boxes; there is no sentinel
/// string to compare against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum FacetFilter {
    /// No constraint.
    #[default]
    Any,
    /// Facet must equal this value exactly.
    Exactly(String),
}

impl FacetFilter {
    /// Creates an exact-match constraint.
    pub fn exactly(value: impl Into<String>) -> Self {
        FacetFilter::Exactly(value.into())
    }

    /// Checks a product facet against the constraint (case-sensitive).
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::Any => true,
            FacetFilter::Exactly(wanted) => wanted == value,
        }
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, FacetFilter::Any)
    }
}

// =============================================================================
// Sort Mode
// =============================================================================

/// Ordering applied to the filtered view.
///
/// The wire values match the `<option value>`s of the sort select:
/// `featured`, `price-asc`, `price-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortMode {
    /// Featured products first, otherwise catalog order.
    #[default]
    #[serde(rename = "featured")]
    Featured,
    /// Cheapest first.
    #[serde(rename = "price-asc", alias = "price-ascending")]
    PriceAscending,
    /// Most expensive first.
    #[serde(rename = "price-desc", alias = "price-descending")]
    PriceDescending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::Featured,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
    ];

    /// Returns the wire value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceAscending => "price-asc",
            SortMode::PriceDescending => "price-desc",
        }
    }

    /// Parses a raw select value, falling back to `Featured` when it is not
    /// recognised.
    pub fn parse_or_default(raw: &str) -> SortMode {
        raw.parse().unwrap_or_else(|err| {
            warn!(sort = %raw, error = %err, "Unrecognised sort mode, using featured");
            SortMode::default()
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(SortMode::Featured),
            "price-asc" | "price-ascending" => Ok(SortMode::PriceAscending),
            "price-desc" | "price-descending" => Ok(SortMode::PriceDescending),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortMode::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
