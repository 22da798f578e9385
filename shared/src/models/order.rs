//! Order Models
//!
//! Row types for persisted orders plus the submit-order request/response
//! payloads exchanged with the kiosk and cashier frontends (camelCase on
//! the wire).

use serde::{Deserialize, Serialize};

use super::ingredient::LowStockAlert;
use super::payment::Payment;

/// Order header, one row per completed checkout, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// Server-clock calendar date, "YYYY-MM-DD"
    pub order_date: String,
    /// Server-clock wall time, "HH:MM:SS"
    pub order_time: String,
    pub total_cost: f64,
    pub employee_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub created_at: i64,
}

/// One physical unit of one ordered drink
///
/// A quantity-3 cart line persists as 3 identical rows; inventory
/// deduction iterates per physical unit with no separate quantity
/// bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    /// Denormalized display name; recipe matching keys on this string
    pub name: String,
    /// Human-readable, e.g. "Sweetness: Normal (100%), Ice: Regular"
    pub modifications: String,
    /// Comma-joined topping names, empty when none
    pub toppings: String,
    pub price: f64,
}

/// Order readback for the cashier receipt screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

// ===== Submit order wire types =====

/// Per-drink customizations chosen on the kiosk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    #[serde(default)]
    pub sweetness: Option<String>,
    #[serde(default)]
    pub ice: Option<String>,
    #[serde(default)]
    pub toppings: Vec<String>,
}

/// One cart line as submitted by the frontend
///
/// `price` is the resolved unit price including addon costs, computed by
/// the caller before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(default)]
    pub menu_item_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub customizations: Option<Customizations>,
}

/// Loyalty redemption data, pre-computed by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRedemption {
    #[serde(default)]
    pub points_redeemed: i64,
    /// Currency discount already applied to the order total
    #[serde(default)]
    pub discount: f64,
}

/// POST /api/orders request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    #[serde(default)]
    pub cart: Vec<CartLine>,
    /// Pre-discount cart total; missing or negative fails validation
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub rewards: Option<RewardRedemption>,
}

impl SubmitOrderRequest {
    /// Final total after the caller-supplied reward discount
    pub fn final_total(&self) -> f64 {
        let total = self.total_cost.unwrap_or(0.0);
        let discount = self.rewards.as_ref().map(|r| r.discount).unwrap_or(0.0);
        total - discount
    }
}

/// POST /api/orders response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderResponse {
    pub order_id: i64,
    pub success: bool,
    /// Ingredients that dropped below the low-stock threshold during
    /// this order's deductions (operational signal, may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_stock: Vec<LowStockAlert>,
}
