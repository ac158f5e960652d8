//! # bloom-core: Pure Storefront Logic
//!
//! This crate is the computation core of the Bloom storefront: the catalog,
//! the filter/sort engine and the cart ledger, as plain data and pure
//! functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bloom Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Page Script (rendering)                        │   │
//! │  │    Filter bar ──► Product grid ──► Cart drawer                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command / query setters                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bloom-shop (Session)                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bloom-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   query   │  │  ledger   │  │   types   │  │   │
//! │  │   │  Catalog  │  │   Query   │  │CartLedger │  │  Product  │  │   │
//! │  │   │  lookups  │  │  filter   │  │CartSummary│  │ SortMode  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, FacetFilter, SortMode)
//! - [`money`] - Integer money type
//! - [`catalog`] - Immutable product catalog
//! - [`query`] - Filter/sort engine
//! - [`ledger`] - Cart ledger and summary
//! - [`validation`] - Catalog validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bloom_core::{Catalog, CartLedger, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let mut ledger = CartLedger::new();
//!
//! ledger.add_one(&catalog, ProductId::new(1));
//! ledger.add_one(&catalog, ProductId::new(1));
//!
//! let summary = ledger.summarize(&catalog);
//! assert_eq!(summary.total_item_count, 2);
//! assert_eq!(summary.total_price.units(), 156000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{CartLedger, CartLine, CartSummary};
pub use money::Money;
pub use query::{compute_filtered_view, FilteredView, Query};
pub use types::*;
