//! Utilities

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
