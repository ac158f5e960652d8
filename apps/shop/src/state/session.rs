//! # Session State
//!
//! The owning context for one shopper's page: catalog, query and cart ledger.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session                                         │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │   Catalog    │  │    Query     │  │  CartLedger  │  │StoreConfig │  │
//! │  │  (read-only) │  │  (&mut self) │  │  (&mut self) │  │ (read-only)│  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  Events are handled one at a time through `&mut Session`, so there is   │
//! │  no locking: the borrow checker serializes access.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bloom_core::{
    compute_filtered_view, CartLedger, CartSummary, Catalog, CoreResult, FacetFilter,
    FilteredView, Product, ProductId, Query, SortMode,
};
use tracing::{debug, info};

use super::config::StoreConfig;

/// One shopper's storefront state.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    query: Query,
    ledger: CartLedger,
    config: StoreConfig,
}

impl Session {
    /// Creates a session over `catalog`.
    ///
    /// ## Errors
    /// `CoreError::ProductNotFound` if the configured starter kit names a
    /// product the catalog does not carry.
    pub fn new(catalog: Catalog, config: StoreConfig) -> CoreResult<Self> {
        for &id in &config.starter_kit {
            catalog.require(id)?;
        }

        info!(
            store = %config.store_name,
            products = catalog.len(),
            "Storefront session started"
        );

        Ok(Session {
            query: Query::new().with_sort(config.default_sort),
            ledger: CartLedger::new(),
            catalog,
            config,
        })
    }

    /// Built-in catalog with default configuration.
    pub fn with_defaults() -> Self {
        Session {
            catalog: Catalog::builtin(),
            query: Query::default(),
            ledger: CartLedger::new(),
            config: StoreConfig::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Query Setters
    // =========================================================================
    // Each setter overwrites one field and returns the recomputed view.

    pub fn set_search(&mut self, search: impl Into<String>) -> FilteredView<'_> {
        self.query.search = search.into();
        debug!(search = %self.query.search, "search updated");
        self.filtered_view()
    }

    pub fn set_category(&mut self, category: FacetFilter) -> FilteredView<'_> {
        debug!(?category, "category updated");
        self.query.category = category;
        self.filtered_view()
    }

    pub fn set_skin_type(&mut self, skin_type: FacetFilter) -> FilteredView<'_> {
        debug!(?skin_type, "skin type updated");
        self.query.skin_type = skin_type;
        self.filtered_view()
    }

    pub fn set_sort(&mut self, sort: SortMode) -> FilteredView<'_> {
        debug!(%sort, "sort updated");
        self.query.sort = sort;
        self.filtered_view()
    }

    /// Sets the sort from a raw select value; unrecognised values sort by
    /// featured.
    pub fn set_sort_raw(&mut self, raw: &str) -> FilteredView<'_> {
        self.set_sort(SortMode::parse_or_default(raw))
    }

    /// Products matching the current query, in display order.
    pub fn filtered_view(&self) -> FilteredView<'_> {
        compute_filtered_view(&self.catalog, &self.query)
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit; unknown ids are ignored.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<u32> {
        self.ledger.add_one(&self.catalog, id)
    }

    /// Moves a cart entry by `delta`; see [`CartLedger::adjust_quantity`].
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> u32 {
        self.ledger.adjust_quantity(&self.catalog, id, delta)
    }

    /// Drops a cart entry; absent ids are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<u32> {
        self.ledger.remove(id)
    }

    /// Adds one of each configured starter-kit product, in order.
    pub fn add_starter_kit(&mut self) {
        for &id in &self.config.starter_kit {
            self.ledger.add_one(&self.catalog, id);
        }
        debug!(kit = ?self.config.starter_kit, "starter kit added");
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.ledger.clear();
    }

    /// Recomputed cart summary.
    pub fn cart_summary(&self) -> CartSummary {
        self.ledger.summarize(&self.catalog)
    }

    /// Read-only product lookup.
    pub fn product(&self, id: ProductId) -> CoreResult<&Product> {
        self.catalog.require(id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_defaults()
    }
}
