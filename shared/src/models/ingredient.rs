//! Ingredient Model

use serde::{Deserialize, Serialize};

/// A stocked raw material or consumable
///
/// Stock is intentionally allowed to go negative: over-deduction is a
/// soft failure reported via the low-stock signal, never a reason to
/// block a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub stock: f64,
    pub unit: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Low-stock observation emitted during inventory deduction
///
/// Informational only; surfaced in the submit response and logged for
/// the manager dashboard, not re-validated against the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub ingredient: String,
    pub remaining: f64,
}
