//! Ingredient Repository

use super::RepoResult;
use shared::models::Ingredient;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Ingredient>> {
    let rows = sqlx::query_as::<_, Ingredient>(
        "SELECT id, name, stock, unit, created_at, updated_at FROM ingredient ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Ingredient>> {
    let row = sqlx::query_as::<_, Ingredient>(
        "SELECT id, name, stock, unit, created_at, updated_at FROM ingredient WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Atomically decrement an ingredient's stock and return the resulting
/// level.
///
/// Returns `None` when no ingredient row matches the name; callers treat
/// that as a no-op, not a failure (a missing "Ice" row indicates a data
/// setup problem, not a reason to abort a sale). Stock may go negative.
pub async fn deduct_by_name(
    conn: &mut SqliteConnection,
    name: &str,
    quantity: f64,
) -> RepoResult<Option<f64>> {
    let now = shared::util::now_millis();
    let remaining: Option<f64> = sqlx::query_scalar(
        "UPDATE ingredient SET stock = stock - ?1, updated_at = ?2 WHERE name = ?3 RETURNING stock",
    )
    .bind(quantity)
    .bind(now)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(remaining)
}
