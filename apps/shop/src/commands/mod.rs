//! # Commands Module
//!
//! Every page event, as a typed command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command enum + dispatch)
//! ├── product.rs  ◄─── Filter bar, details, select options
//! └── cart.rs     ◄─── Cart manipulation
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  <button data-action="add" data-id="4">Agregar</button>                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::from_action("add", "4")  ──►  Command::AddToCart { id: 4 }    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  session.dispatch(command)          (exhaustive match, no strings)      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CommandOutcome::Cart(CartResponse) | CommandOutcome::Details(..)       │
//! │         │ (JSON)                                                        │
//! │         ▼                                                               │
//! │  renderer                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod product;

use bloom_core::ProductId;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::Session;

pub use cart::{CartResponse, CartTotals};
pub use product::{FilterOptions, ProductDetails};

// =============================================================================
// Command
// =============================================================================

/// A discrete product or cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "camelCase")]
#[ts(export)]
pub enum Command {
    AddToCart { id: ProductId },
    AdjustQuantity { id: ProductId, delta: i64 },
    RemoveFromCart { id: ProductId },
    ViewDetails { id: ProductId },
}

impl Command {
    /// Parses the `data-action` / `data-id` pair a button carries.
    ///
    /// | action     | command                     |
    /// |------------|-----------------------------|
    /// | `add`      | `AddToCart`                 |
    /// | `details`  | `ViewDetails`               |
    /// | `increase` | `AdjustQuantity { +1 }`     |
    /// | `decrease` | `AdjustQuantity { -1 }`     |
    /// | `remove`   | `RemoveFromCart`            |
    pub fn from_action(action: &str, id: &str) -> ApiResult<Command> {
        let id: ProductId = id.parse()?;
        match action.trim() {
            "add" => Ok(Command::AddToCart { id }),
            "details" => Ok(Command::ViewDetails { id }),
            "increase" => Ok(CartAction::Increase.command(id)),
            "decrease" => Ok(CartAction::Decrease.command(id)),
            "remove" => Ok(CartAction::Remove.command(id)),
            other => Err(ApiError::validation(format!("Unknown action: {}", other))),
        }
    }

    pub fn product_id(&self) -> ProductId {
        match *self {
            Command::AddToCart { id }
            | Command::AdjustQuantity { id, .. }
            | Command::RemoveFromCart { id }
            | Command::ViewDetails { id } => id,
        }
    }
}

/// Buttons inside a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
}

impl CartAction {
    pub fn command(self, id: ProductId) -> Command {
        match self {
            CartAction::Increase => Command::AdjustQuantity { id, delta: 1 },
            CartAction::Decrease => Command::AdjustQuantity { id, delta: -1 },
            CartAction::Remove => Command::RemoveFromCart { id },
        }
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// What a dispatched command hands back to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum CommandOutcome {
    /// Recomputed cart, after any cart command.
    Cart(CartResponse),
    /// Read-only detail view.
    Details(ProductDetails),
}

impl CommandOutcome {
    /// Serializes the outcome for the page script.
    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Session {
    /// Applies one command and returns the recomputed view it affects.
    ///
    /// Cart commands never fail: unknown ids leave the cart unchanged.
    pub fn dispatch(&mut self, command: Command) -> ApiResult<CommandOutcome> {
        debug!(product_id = %command.product_id(), ?command, "dispatch");
        let outcome = match command {
            Command::AddToCart { id } => CommandOutcome::Cart(cart::add_to_cart(self, id)),
            Command::AdjustQuantity { id, delta } => {
                CommandOutcome::Cart(cart::adjust_quantity(self, id, delta))
            }
            Command::RemoveFromCart { id } => {
                CommandOutcome::Cart(cart::remove_from_cart(self, id))
            }
            Command::ViewDetails { id } => {
                CommandOutcome::Details(product::view_details(self, id)?)
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    fn cart_of(outcome: CommandOutcome) -> CartResponse {
        match outcome {
            CommandOutcome::Cart(cart) => cart,
            other => panic!("expected cart outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_from_action() {
        assert_eq!(
            Command::from_action("add", "1").unwrap(),
            Command::AddToCart { id: id(1) }
        );
        assert_eq!(
            Command::from_action("details", "3").unwrap(),
            Command::ViewDetails { id: id(3) }
        );
        assert_eq!(
            Command::from_action("increase", "2").unwrap(),
            Command::AdjustQuantity { id: id(2), delta: 1 }
        );
        assert_eq!(
            Command::from_action("decrease", "2").unwrap(),
            Command::AdjustQuantity { id: id(2), delta: -1 }
        );
        assert_eq!(
            Command::from_action("remove", "5").unwrap(),
            Command::RemoveFromCart { id: id(5) }
        );
    }

    #[test]
    fn test_from_action_rejects_bad_input() {
        let err = Command::from_action("buy", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown action: buy");

        let err = Command::from_action("add", "uno").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_product_id() {
        assert_eq!(CartAction::Decrease.command(id(6)).product_id(), id(6));
    }

    #[test]
    fn test_dispatch_add_adjust_remove() {
        let mut session = Session::default();

        let cart = cart_of(session.dispatch(Command::AddToCart { id: id(2) }).unwrap());
        assert_eq!(cart.totals.total_item_count, 1);

        let cart = cart_of(
            session
                .dispatch(CartAction::Decrease.command(id(2)))
                .unwrap(),
        );
        assert!(cart.lines.is_empty());

        let cart = cart_of(session.dispatch(Command::AddToCart { id: id(4) }).unwrap());
        assert_eq!(cart.lines.len(), 1);
        let cart = cart_of(session.dispatch(CartAction::Remove.command(id(4))).unwrap());
        assert!(cart.lines.is_empty());
    }

    #[test]
    fn test_dispatch_unknown_id_leaves_cart_unchanged() {
        let mut session = Session::default();
        let cart = cart_of(
            session
                .dispatch(Command::AdjustQuantity { id: id(99), delta: -1 })
                .unwrap(),
        );
        assert!(cart.lines.is_empty());
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_dispatch_insertion_order() {
        let mut session = Session::default();
        for n in [1, 2, 4] {
            session.dispatch(Command::AddToCart { id: id(n) }).unwrap();
        }
        let cart = cart_of(session.dispatch(CartAction::Increase.command(id(1))).unwrap());
        let lines: Vec<(u32, u32)> = cart
            .lines
            .iter()
            .map(|l| (l.product.id.get(), l.quantity))
            .collect();
        assert_eq!(lines, vec![(1, 2), (2, 1), (4, 1)]);
    }

    #[test]
    fn test_dispatch_view_details() {
        let mut session = Session::default();
        let outcome = session.dispatch(Command::ViewDetails { id: id(5) }).unwrap();
        match outcome {
            CommandOutcome::Details(details) => assert_eq!(details.name, "Aceite Facial Nocturno"),
            other => panic!("expected details, got {other:?}"),
        }

        let err = session
            .dispatch(Command::ViewDetails { id: id(0) })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        // Details never touch the cart
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_value(Command::AdjustQuantity { id: id(3), delta: -1 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "action": "adjustQuantity", "id": 3, "delta": -1 })
        );

        let parsed: Command =
            serde_json::from_str(r#"{ "action": "addToCart", "id": 6 }"#).unwrap();
        assert_eq!(parsed, Command::AddToCart { id: id(6) });
    }

    #[test]
    fn test_outcome_to_json() {
        let mut session = Session::default();
        let outcome = session.dispatch(Command::AddToCart { id: id(1) }).unwrap();
        let json: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();

        assert_eq!(json["kind"], "cart");
        assert_eq!(json["data"]["totals"]["totalPrice"], 78000);
    }
}
