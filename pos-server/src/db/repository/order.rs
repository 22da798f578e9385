//! Order Repository
//!
//! Inserts run inside the submit transaction; reads serve the cashier
//! receipt screen after commit.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderDetail, OrderItem};
use sqlx::{SqliteConnection, SqlitePool};

/// Insert the order header and return its generated identifier.
pub async fn insert_order(
    conn: &mut SqliteConnection,
    order_date: &str,
    order_time: &str,
    total_cost: f64,
    employee_id: Option<i64>,
    customer_id: Option<i64>,
    created_at: i64,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO orders (id, order_date, order_time, total_cost, employee_id, customer_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(id)
    .bind(order_date)
    .bind(order_time)
    .bind(total_cost)
    .bind(employee_id)
    .bind(customer_id)
    .bind(created_at)
    .execute(&mut *conn)
    .await?;
    Ok(id)
}

/// Insert one line-item row (one physical unit).
pub async fn insert_item(
    conn: &mut SqliteConnection,
    order_id: i64,
    name: &str,
    modifications: &str,
    toppings: &str,
    price: f64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO order_item (id, order_id, name, modifications, toppings, price) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(shared::util::snowflake_id())
    .bind(order_id)
    .bind(name)
    .bind(modifications)
    .bind(toppings)
    .bind(price)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, Order>(
        "SELECT id, order_date, order_time, total_cost, employee_id, customer_id, created_at FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let rows = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, name, modifications, toppings, price FROM order_item WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Full order readback: header + line items + payments.
pub async fn get_detail(pool: &SqlitePool, id: i64) -> RepoResult<OrderDetail> {
    let order = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;
    let items = find_items(pool, id).await?;
    let payments = super::payment::list_by_order(pool, id).await?;
    Ok(OrderDetail {
        order,
        items,
        payments,
    })
}
