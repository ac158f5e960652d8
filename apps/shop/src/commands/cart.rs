//! # Cart Commands
//!
//! Cart manipulation handlers and the response the cart drawer renders.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ adjust_quantity(±1)     │
//! │  │  Cart    │◄─────────────────│          │───┘ add_starter_kit         │
//! │  └──────────┘ remove / qty→0   └──────────┘                             │
//! │                                                                         │
//! │  Every handler returns the full recomputed CartResponse.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bloom_core::{CartLine, CartSummary, Money, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::state::Session;

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// Cart totals for the drawer footer and the header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub line_count: u32,
    /// Sum of quantities.
    pub total_item_count: u64,
    /// Sum of line totals.
    pub total_price: Money,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        CartResponse {
            totals: CartTotals {
                line_count: u32::try_from(summary.lines.len()).unwrap_or(u32::MAX),
                total_item_count: summary.total_item_count,
                total_price: summary.total_price,
            },
            lines: summary.lines,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session.cart_summary())
}

/// Adds one unit of a product ("Agregar").
pub fn add_to_cart(session: &mut Session, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "add_to_cart command");
    session.add_to_cart(product_id);
    get_cart(session)
}

/// Moves a cart entry by `delta` ("+" / "-").
///
/// A quantity that reaches zero takes the product out of the cart.
pub fn adjust_quantity(session: &mut Session, product_id: ProductId, delta: i64) -> CartResponse {
    debug!(product_id = %product_id, delta, "adjust_quantity command");
    session.adjust_quantity(product_id, delta);
    get_cart(session)
}

/// Removes a product from the cart ("Eliminar").
pub fn remove_from_cart(session: &mut Session, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    session.remove_from_cart(product_id);
    get_cart(session)
}

/// Adds the configured starter kit.
pub fn add_starter_kit(session: &mut Session) -> CartResponse {
    debug!("add_starter_kit command");
    session.add_starter_kit();
    get_cart(session)
}

/// Clears all items from the cart.
pub fn clear_cart(session: &mut Session) -> CartResponse {
    debug!("clear_cart command");
    session.clear_cart();
    get_cart(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_twice_then_totals() {
        let mut session = Session::default();
        add_to_cart(&mut session, id(1));
        let cart = add_to_cart(&mut session, id(1));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].line_total.units(), 156000);
        assert_eq!(cart.totals.line_count, 1);
        assert_eq!(cart.totals.total_item_count, 2);
        assert_eq!(cart.totals.total_price.units(), 156000);
    }

    #[test]
    fn test_decrease_removes_line() {
        let mut session = Session::default();
        add_to_cart(&mut session, id(2));
        let cart = adjust_quantity(&mut session, id(2), -1);

        assert!(cart.lines.is_empty());
        assert_eq!(cart.totals.total_price, Money::zero());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = Session::default();
        add_starter_kit(&mut session);

        let cart = remove_from_cart(&mut session, id(2));
        let ids: Vec<u32> = cart.lines.iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);

        let cart = clear_cart(&mut session);
        assert_eq!(cart.totals.line_count, 0);
    }

    #[test]
    fn test_response_json_shape() {
        let mut session = Session::default();
        let cart = add_to_cart(&mut session, id(3));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["totals"]["totalItemCount"], 1);
        assert_eq!(json["totals"]["totalPrice"], 65000);
        assert_eq!(json["lines"][0]["product"]["name"], "Gel Calmante Aloe");
    }
}
