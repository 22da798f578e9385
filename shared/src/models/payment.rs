//! Payment Model

use serde::{Deserialize, Serialize};

/// One payment record per order
///
/// Status is fixed to "Completed": no gateway integration, no
/// partial/pending states are modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: String,
    pub amount: f64,
    pub status: String,
    pub created_at: i64,
}
