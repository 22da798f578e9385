//! Customer Repository

use super::RepoResult;
use shared::models::Customer;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let row = sqlx::query_as::<_, Customer>(
        "SELECT id, name, phone, points, created_at, updated_at FROM customer WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Atomically apply `points = points + earned - redeemed` in one update.
///
/// A single SQL-level update avoids a read-modify-write race across
/// concurrent orders for the same customer. When `redeemed > 0` the
/// update is conditional on the balance still covering the redemption,
/// so a stale validation-time check cannot drive the balance negative;
/// zero affected rows then means the guard (or the customer row) failed.
pub async fn apply_points_delta(
    conn: &mut SqliteConnection,
    customer_id: i64,
    earned: i64,
    redeemed: i64,
) -> RepoResult<u64> {
    let now = shared::util::now_millis();
    let result = if redeemed > 0 {
        sqlx::query(
            "UPDATE customer SET points = points + ?1 - ?2, updated_at = ?3 WHERE id = ?4 AND points >= ?2",
        )
        .bind(earned)
        .bind(redeemed)
        .bind(now)
        .bind(customer_id)
        .execute(&mut *conn)
        .await?
    } else {
        sqlx::query("UPDATE customer SET points = points + ?1, updated_at = ?2 WHERE id = ?3")
            .bind(earned)
            .bind(now)
            .bind(customer_id)
            .execute(&mut *conn)
            .await?
    };
    Ok(result.rows_affected())
}
