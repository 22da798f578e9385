//! Recipe Repository
//!
//! Read-only to the order core; recipe management happens in the
//! inventory tooling. Lookup keys on the item display name string.

use super::RepoResult;
use shared::models::RecipeLine;
use sqlx::SqliteConnection;

/// All (ingredient name, per-unit quantity) pairs for one menu item name.
/// Returns an empty vec when the name matches no recipe rows.
pub async fn find_lines_by_item_name(
    conn: &mut SqliteConnection,
    item_name: &str,
) -> RepoResult<Vec<RecipeLine>> {
    let rows = sqlx::query_as::<_, RecipeLine>(
        "SELECT i.name AS ingredient_name, r.quantity FROM recipe r JOIN ingredient i ON i.id = r.ingredient_id WHERE r.item_name = ?",
    )
    .bind(item_name)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
