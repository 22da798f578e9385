//! Shared types for the bubble-tea POS
//!
//! Common types used by the server and the kiosk/cashier frontends:
//! error codes, response envelopes, data models, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
