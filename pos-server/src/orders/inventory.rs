//! Inventory deduction
//!
//! The submit pipeline accumulates every required deduction into a
//! [`DeductionPlan`] keyed by ingredient name, then applies the plan as
//! one UPDATE per ingredient inside the order transaction. Subtraction
//! is commutative, so aggregating per ingredient is observably
//! identical to deducting line by line while touching each stock row
//! once.
//!
//! Two deliberate softnesses: an ingredient name with no stock row is
//! skipped with a warning rather than failing the order, and stock may
//! go negative (the shop can oversell paper records of inventory).

use std::collections::BTreeMap;

use shared::models::LowStockAlert;
use sqlx::SqliteConnection;
use tracing::warn;

use crate::db::repository::{self, RepoResult};

/// Remaining stock strictly below this is flagged back to the cashier.
pub const LOW_STOCK_THRESHOLD: f64 = 20.0;

/// Consumables deducted once per physical drink unit regardless of item.
pub const CONSUMABLES: &[&str] = &["Ice", "Cups", "Straws", "Napkins"];

/// Aggregated per-ingredient quantities for one order.
///
/// BTreeMap keeps application order deterministic, which keeps the
/// deduction log stable and tests simple.
#[derive(Debug, Default)]
pub struct DeductionPlan {
    entries: BTreeMap<String, f64>,
}

impl DeductionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `ingredient` to the plan.
    pub fn add(&mut self, ingredient: &str, quantity: f64) {
        if quantity <= 0.0 {
            return;
        }
        *self.entries.entry(ingredient.to_string()).or_insert(0.0) += quantity;
    }

    /// One unit of each consumable per physical drink unit.
    pub fn add_consumables(&mut self, units: i64) {
        for name in CONSUMABLES {
            self.add(name, units as f64);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity(&self, ingredient: &str) -> Option<f64> {
        self.entries.get(ingredient).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

/// Apply every deduction in the plan on the given transaction
/// connection, returning alerts for ingredients whose remaining stock
/// fell below [`LOW_STOCK_THRESHOLD`].
pub async fn apply(
    conn: &mut SqliteConnection,
    plan: &DeductionPlan,
) -> RepoResult<Vec<LowStockAlert>> {
    let mut alerts = Vec::new();
    for (ingredient, quantity) in plan.iter() {
        match repository::ingredient::deduct_by_name(conn, ingredient, quantity).await? {
            Some(remaining) => {
                if remaining < LOW_STOCK_THRESHOLD {
                    warn!(ingredient, remaining, "low stock");
                    alerts.push(LowStockAlert {
                        ingredient: ingredient.to_string(),
                        remaining,
                    });
                }
            }
            None => {
                warn!(ingredient, "no stock row for ingredient, skipping deduction");
            }
        }
    }
    Ok(alerts)
}
