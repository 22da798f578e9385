//! Payment Repository

use super::RepoResult;
use shared::models::Payment;
use sqlx::{SqliteConnection, SqlitePool};

/// Status is fixed: no gateway, no partial/pending states.
const STATUS_COMPLETED: &str = "Completed";

/// Insert one payment row tied to an order, with the final
/// (post-discount) total.
pub async fn insert(
    conn: &mut SqliteConnection,
    order_id: i64,
    method: &str,
    amount: f64,
    created_at: i64,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO payment (id, order_id, method, amount, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(order_id)
    .bind(method)
    .bind(amount)
    .bind(STATUS_COMPLETED)
    .bind(created_at)
    .execute(&mut *conn)
    .await?;
    Ok(id)
}

pub async fn list_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, Payment>(
        "SELECT id, order_id, method, amount, status, created_at FROM payment WHERE order_id = ? ORDER BY created_at",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
