//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Catalog entry for one sellable drink or snack
///
/// The order core consumes this table read-only (display-name lookup).
/// Management CRUD lives outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
