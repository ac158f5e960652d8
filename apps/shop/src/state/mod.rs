//! # State Module
//!
//! Owned state for one storefront page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  StoreConfig::load(path) ──► Session::new(Catalog::builtin(), config)  │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │              ┌──────────────────────────────────────────┐               │
//! │              │  Session                                 │               │
//! │              │    catalog  (immutable)                  │               │
//! │              │    query    (overwritten per input)      │               │
//! │              │    ledger   (cart entries)               │               │
//! │              │    config   (immutable)                  │               │
//! │              └──────────────────────────────────────────┘               │
//! │                                                                         │
//! │  There is exactly one owner. Nothing here is global or shared.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigResult, StoreConfig};
pub use session::Session;
