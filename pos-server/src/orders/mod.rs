//! Order submission core
//!
//! A submitted cart becomes an order header, one line-item row per
//! physical unit, per-ingredient stock deductions, a payment record,
//! and a loyalty ledger update, all inside a single SQLite transaction
//! that either fully commits or fully rolls back.
//!
//! - [`cart`]: request validation and line formatting (pure)
//! - [`toppings`]: fixed topping to raw-ingredient mapping
//! - [`inventory`]: aggregated stock deduction and low-stock flagging
//! - [`submit`]: the transaction coordinator tying the stages together

pub mod cart;
pub mod inventory;
pub mod submit;
pub mod toppings;

pub use submit::submit_order;
