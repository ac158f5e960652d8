//! # Bloom Shop Library
//!
//! Session and command layer for the Bloom storefront page.
//!
//! ## Module Organization
//! ```text
//! bloom_shop/
//! ├── lib.rs          ◄─── You are here (startup & tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session: catalog, query, cart ledger
//! │   └── config.rs   ◄─── StoreConfig loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum + dispatch
//! │   ├── product.rs  ◄─── Filter bar, details, select options
//! │   └── cart.rs     ◄─── Cart manipulation
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()            RUST_LOG or "info,bloom_*=debug"          │
//! │  2. StoreConfig::load(..)     defaults → storefront.toml → BLOOM_* env  │
//! │  3. Session::new(..)          built-in catalog, default query,          │
//! │                               empty cart                                │
//! │  4. page events               Command::from_action → session.dispatch   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use bloom_core::Catalog;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use commands::{CartAction, Command, CommandOutcome};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::{ConfigError, Session, StoreConfig};

/// Opens a storefront session over the built-in catalog.
///
/// Configuration problems never stop the page: an unreadable or invalid
/// config, or a starter kit naming unknown products, falls back to the
/// defaults with a warning.
pub fn open_session(config_path: Option<PathBuf>) -> Session {
    let config = StoreConfig::load_or_default(config_path);
    info!(store = %config.store_name, currency = %config.currency_code, "Store config loaded");

    Session::new(Catalog::builtin(), config).unwrap_or_else(|e| {
        warn!("Store config does not fit the catalog: {}. Using defaults.", e);
        Session::with_defaults()
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bloom_core=trace` - Show trace for the core crate only
/// - Default: INFO, DEBUG for the bloom crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bloom_core=debug,bloom_shop=debug"));

    // A host that already installed a subscriber keeps it
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_session_with_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let session = open_session(Some(dir.path().join("storefront.toml")));
        assert_eq!(session.catalog().len(), 6);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_open_session_falls_back_on_unknown_kit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_name = \"Bloom Sur\"").unwrap();
        writeln!(file, "starter_kit = [1, 50]").unwrap();

        let session = open_session(Some(file.path().to_path_buf()));
        assert_eq!(session.config(), &StoreConfig::default());
    }

    #[test]
    fn test_open_session_uses_file_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_name = \"Bloom Sur\"").unwrap();
        writeln!(file, "starter_kit = [6]").unwrap();

        let mut session = open_session(Some(file.path().to_path_buf()));
        assert_eq!(session.config().store_name, "Bloom Sur");

        session.add_starter_kit();
        let summary = session.cart_summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total_price.units(), 45000);
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
