//! # Filter / Sort Engine
//!
//! Turns the catalog plus the shopper's current [`Query`] into the ordered
//! list of products the grid shows.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog (catalog order)                                                │
//! │      │                                                                  │
//! │      ▼  filter: name contains search (case-insensitive)                 │
//! │      │          AND category matches AND skin type matches              │
//! │      ▼                                                                  │
//! │  subset (still catalog order)                                           │
//! │      │                                                                  │
//! │      ▼  stable sort by SortMode                                         │
//! │      │                                                                  │
//! │  FilteredView ──► renderer (empty is fine: "no results" is its job)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every sort is stable, so equal keys keep catalog order and two calls with
//! the same query always produce the same sequence.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::types::{FacetFilter, Product, SortMode};

/// Products matching a query, in display order.
pub type FilteredView<'a> = Vec<&'a Product>;

/// The shopper's current filter and sort criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Query {
    /// Substring matched against product names, case-insensitively.
    pub search: String,
    pub category: FacetFilter,
    pub skin_type: FacetFilter,
    pub sort: SortMode,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: FacetFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_skin_type(mut self, skin_type: FacetFilter) -> Self {
        self.skin_type = skin_type;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Checks all three filter clauses against one product.
    pub fn matches(&self, product: &Product) -> bool {
        Predicate::new(self).matches(product)
    }
}

/// A query's filter clauses with the search needle lowercased once.
struct Predicate<'q> {
    query: &'q Query,
    needle: String,
}

impl<'q> Predicate<'q> {
    fn new(query: &'q Query) -> Self {
        Predicate {
            query,
            needle: query.search.to_lowercase(),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        (self.needle.is_empty() || product.name.to_lowercase().contains(&self.needle))
            && self.query.category.matches(&product.category)
            && self.query.skin_type.matches(&product.skin_type)
    }
}

/// Applies `query` to `catalog`: filter first, then stable sort.
///
/// ## Example
/// ```rust
/// use bloom_core::{compute_filtered_view, Catalog, Query, SortMode};
///
/// let catalog = Catalog::builtin();
/// let query = Query::new().with_sort(SortMode::PriceAscending);
///
/// let ids: Vec<u32> = compute_filtered_view(&catalog, &query)
///     .iter()
///     .map(|p| p.id.get())
///     .collect();
/// assert_eq!(ids, vec![6, 4, 3, 1, 5, 2]);
/// ```
pub fn compute_filtered_view<'a>(catalog: &'a Catalog, query: &Query) -> FilteredView<'a> {
    let predicate = Predicate::new(query);
    let mut view: FilteredView<'a> = catalog.iter().filter(|p| predicate.matches(p)).collect();

    // slice::sort_by_key / sort_by are stable
    match query.sort {
        SortMode::Featured => view.sort_by_key(|p| !p.featured),
        SortMode::PriceAscending => view.sort_by_key(|p| p.price),
        SortMode::PriceDescending => view.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    view
}

// =============================================================================
// Unit Tests
// =============================================================================
