//! DineIn core
//!
//! In-memory order/reservation session for the restaurant discovery app:
//!
//! - **orders**: the session state machine, cart math and command dispatch
//! - **catalog**: menu provider and restaurant directory (mock data)
//! - **receipt**: receipt built from a placed order snapshot
//! - **views**: per-screen local UI state
//! - **core**: configuration
//! - **utils**: logging setup
//!
//! # Data Flow
//!
//! ```text
//! UI event → SessionCommand → OrderSession::execute → CommandAction
//!                                     ↓
//!                              CommandResponse (state, summary, error)
//!                                     ↓
//!                                  Receipt
//! ```

pub mod catalog;
pub mod core;
pub mod orders;
pub mod receipt;
pub mod utils;
pub mod views;

// Re-exports
pub use catalog::{MenuProvider, RestaurantDirectory, StaticMenuProvider};
pub use crate::core::Config;
pub use orders::{OrderSession, SelectionMap, SessionError};
pub use receipt::{Receipt, ReceiptError};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is normal outside development
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
