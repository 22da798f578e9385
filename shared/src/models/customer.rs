//! Customer Model

use serde::{Deserialize, Serialize};

/// Loyalty customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub points: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
