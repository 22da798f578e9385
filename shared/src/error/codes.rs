//! Unified error codes for the bubble-tea POS
//!
//! Error codes are shared between the server and the kiosk/cashier
//! frontends, organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog / inventory errors
//! - 8xxx: Customer / loyalty errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request (empty cart, missing total, missing payment type)
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Cart contains no items
    EmptyCart = 4002,
    /// Cart line could not be resolved to a menu item name
    ItemNotFound = 4003,
    /// Order transaction rolled back
    OrderTransactionFailed = 4004,

    // ==================== 5xxx: Payment ====================
    /// Payment type is missing from the request
    PaymentTypeMissing = 5001,
    /// Payment not found
    PaymentNotFound = 5002,

    // ==================== 6xxx: Catalog / Inventory ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Ingredient not found
    IngredientNotFound = 6002,

    // ==================== 8xxx: Customer / Loyalty ====================
    /// Customer not found
    CustomerNotFound = 8001,
    /// Customer balance does not cover the points being redeemed
    InsufficientPoints = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::OrderNotFound => "Order not found",
            Self::EmptyCart => "Cart must contain at least one item",
            Self::ItemNotFound => "Item could not be resolved",
            Self::OrderTransactionFailed => "Order transaction failed",

            Self::PaymentTypeMissing => "Payment type is required",
            Self::PaymentNotFound => "Payment not found",

            Self::MenuItemNotFound => "Menu item not found",
            Self::IngredientNotFound => "Ingredient not found",

            Self::CustomerNotFound => "Customer not found",
            Self::InsufficientPoints => "Insufficient loyalty points",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// Get the category for this error code
    pub fn category(&self) -> super::ErrorCategory {
        super::ErrorCategory::from_code(self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),

            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::EmptyCart),
            4003 => Ok(Self::ItemNotFound),
            4004 => Ok(Self::OrderTransactionFailed),

            5001 => Ok(Self::PaymentTypeMissing),
            5002 => Ok(Self::PaymentNotFound),

            6001 => Ok(Self::MenuItemNotFound),
            6002 => Ok(Self::IngredientNotFound),

            8001 => Ok(Self::CustomerNotFound),
            8002 => Ok(Self::InsufficientPoints),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),

            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}
