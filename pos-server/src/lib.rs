//! pos-server: bubble-tea shop point-of-sale backend
//!
//! Single-node HTTP service over SQLite. The interesting part is the
//! order submission transaction in [`orders`]; everything else is the
//! thin catalog/readback surface around it.

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

pub use crate::core::{Config, ServerState};
