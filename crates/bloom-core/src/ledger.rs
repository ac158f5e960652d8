//! # Cart Ledger
//!
//! The cart's mapping of product id to held quantity, and the summary derived
//! from it.
//!
//! ## Ledger Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Shopper Action            Ledger Call                 Entry Change     │
//! │  ──────────────            ───────────                 ────────────     │
//! │                                                                         │
//! │  "Agregar" ──────────────► add_one(id) ──────────────► qty += 1         │
//! │                                                        (insert at 1)    │
//! │                                                                         │
//! │  "+" / "-" ──────────────► adjust_quantity(id, ±1) ──► qty += delta     │
//! │                                                        (≤ 0 → removed)  │
//! │                                                                         │
//! │  "Eliminar" ─────────────► remove(id) ───────────────► entry removed    │
//! │                                                                         │
//! │  Cart drawer ────────────► summarize(catalog) ───────► (read only)      │
//! │                                                                         │
//! │  Unknown ids are ignored everywhere; nothing here returns an error.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every stored quantity is ≥ 1; a quantity that would reach 0 removes the
//!   entry instead.
//! - Entries iterate in the order they were first added. Removing an entry
//!   and adding it again places it last.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Ledger
// =============================================================================

/// Insertion-ordered product id → quantity mapping.
///
/// Serializes for inspection only; a ledger is built through its operations,
/// never deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartLedger {
    entries: IndexMap<ProductId, u32>,
}

impl CartLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product, creating the entry at quantity 1.
    ///
    /// Ids that do not resolve in `catalog` are ignored. Returns the new
    /// quantity, or `None` when ignored.
    pub fn add_one(&mut self, catalog: &Catalog, id: ProductId) -> Option<u32> {
        if !catalog.contains(id) {
            debug!(product_id = %id, "add_one ignored: unknown product");
            return None;
        }

        let quantity = self.entries.entry(id).or_insert(0);
        *quantity = quantity.saturating_add(1);
        Some(*quantity)
    }

    /// Moves an entry's quantity by `delta`.
    ///
    /// ## Behavior
    /// - Result ≤ 0: the entry is removed
    /// - No entry and `delta ≤ 0`: no-op
    /// - No entry and `delta > 0`: entry created, if `id` is in the catalog
    ///
    /// Returns the quantity now held (`0` when the product is not in the cart).
    pub fn adjust_quantity(&mut self, catalog: &Catalog, id: ProductId, delta: i64) -> u32 {
        let current = self.quantity(id);

        if current == 0 {
            if delta <= 0 {
                debug!(product_id = %id, delta, "adjust_quantity ignored: not in cart");
                return 0;
            }
            if !catalog.contains(id) {
                debug!(product_id = %id, delta, "adjust_quantity ignored: unknown product");
                return 0;
            }
        }

        let next = i64::from(current).saturating_add(delta);
        if next <= 0 {
            self.entries.shift_remove(&id);
            return 0;
        }

        let next = u32::try_from(next).unwrap_or(u32::MAX);
        self.entries.insert(id, next);
        next
    }

    /// Removes an entry outright. Returns the quantity it held, if any.
    pub fn remove(&mut self, id: ProductId) -> Option<u32> {
        self.entries.shift_remove(&id)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity held for `id` (0 if absent).
    #[inline]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.entries.iter().map(|(&id, &qty)| (id, qty))
    }

    /// Resolves every entry against `catalog` and totals the cart.
    ///
    /// Lines keep insertion order. Entries whose id no longer resolves are
    /// skipped. Line totals and the cart total saturate instead of
    /// overflowing.
    pub fn summarize(&self, catalog: &Catalog) -> CartSummary {
        let lines: Vec<CartLine> = self
            .iter()
            .filter_map(|(id, quantity)| match catalog.get(id) {
                Some(product) => Some(CartLine::new(product, quantity)),
                None => {
                    debug!(product_id = %id, "summarize skipped unresolved entry");
                    None
                }
            })
            .collect();

        let total_item_count: u64 = lines.iter().map(|l| u64::from(l.quantity)).sum();
        let total_price: Money = lines.iter().map(|l| l.line_total).sum();

        CartSummary {
            lines,
            total_item_count,
            total_price,
        }
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// One resolved ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    /// `product.price × quantity`
    pub line_total: Money,
}

impl CartLine {
    pub fn new(product: &Product, quantity: u32) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
            line_total: product.price.multiply_quantity(quantity),
        }
    }
}

/// Derived view of the ledger, recomputed on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of quantities (the badge on the cart button).
    pub total_item_count: u64,
    /// Sum of line totals (the subtotal).
    pub total_price: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
