//! Menu Item Repository
//!
//! Read-only catalog lookups. Menu management CRUD lives outside this
//! service; the order core only resolves display names.

use super::RepoResult;
use shared::models::MenuItem;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, category, price, is_active, created_at, updated_at FROM menu_item WHERE is_active = 1 ORDER BY category, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Resolve a catalog item's display name, used when a cart line carries
/// only the menu item id.
pub async fn find_name_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<String>> {
    let name: Option<String> = sqlx::query_scalar("SELECT name FROM menu_item WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(name)
}
