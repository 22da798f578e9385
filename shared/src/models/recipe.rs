//! Recipe Model

use serde::{Deserialize, Serialize};

/// One recipe row: a menu item name requires `quantity` of an ingredient
/// per unit sold.
///
/// Matching is by item name string, not menu item id, so a menu rename must
/// cascade to recipe rows or deduction silently stops matching. Kept for
/// compatibility with the existing data; see DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Recipe {
    pub id: i64,
    pub item_name: String,
    pub ingredient_id: i64,
    pub quantity: f64,
}

/// Recipe row joined with the ingredient name, as consumed by the
/// inventory deduction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RecipeLine {
    pub ingredient_name: String,
    pub quantity: f64,
}
