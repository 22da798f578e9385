//! Data models
//!
//! Shared between the server and the kiosk/cashier frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod customer;
pub mod ingredient;
pub mod menu_item;
pub mod order;
pub mod payment;
pub mod recipe;

// Re-exports
pub use customer::*;
pub use ingredient::*;
pub use menu_item::*;
pub use order::*;
pub use payment::*;
pub use recipe::*;
