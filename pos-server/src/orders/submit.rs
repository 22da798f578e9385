//! Order submission coordinator
//!
//! Runs the full pipeline for one order: validate, precheck redemption,
//! then inside one transaction write the header, expand cart lines into
//! per-unit item rows while accumulating the deduction plan, apply the
//! plan, record the payment, and settle loyalty points. Any stage error
//! rolls the whole transaction back; nothing about the order persists.

use std::collections::HashMap;

use chrono::Local;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{RecipeLine, SubmitOrderRequest, SubmitOrderResponse};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{info, warn};

use super::{cart, inventory, toppings};
use crate::db::repository;

/// One loyalty point per whole currency unit actually charged.
fn points_earned(final_total: f64) -> i64 {
    final_total.max(0.0).floor() as i64
}

/// Submit an order end to end. On success the returned response carries
/// the new order id and any low-stock alerts raised by the deductions.
pub async fn submit_order(
    pool: &SqlitePool,
    req: &SubmitOrderRequest,
) -> AppResult<SubmitOrderResponse> {
    cart::validate(req)?;
    precheck_redemption(pool, req).await?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    match run_pipeline(&mut tx, req).await {
        Ok((order_id, low_stock)) => {
            tx.commit()
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            info!(order_id, "order committed");
            Ok(SubmitOrderResponse {
                order_id,
                success: true,
                low_stock,
            })
        }
        Err(err) => {
            tx.rollback()
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            warn!(code = %err.code, "order rolled back: {}", err.message);
            Err(classify(err))
        }
    }
}

/// Redemption preconditions, checked against the pool before the
/// transaction opens: the customer must exist and the balance must
/// cover the requested points. The conditional update inside the
/// transaction re-checks the balance, so a concurrent spend between
/// here and commit still cannot overdraw.
async fn precheck_redemption(pool: &SqlitePool, req: &SubmitOrderRequest) -> AppResult<()> {
    let Some(rewards) = &req.rewards else {
        return Ok(());
    };
    if rewards.points_redeemed == 0 {
        return Ok(());
    }
    let Some(customer_id) = req.customer_id else {
        return Err(AppError::invalid_request(
            "Redeeming points requires a customer",
        ));
    };
    let customer = repository::customer::find_by_id(pool, customer_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CustomerNotFound,
                format!("Customer {customer_id} not found"),
            )
        })?;
    if customer.points < rewards.points_redeemed {
        return Err(AppError::new(ErrorCode::InsufficientPoints)
            .with_detail("available", customer.points)
            .with_detail("requested", rewards.points_redeemed));
    }
    Ok(())
}

async fn run_pipeline(
    conn: &mut SqliteConnection,
    req: &SubmitOrderRequest,
) -> AppResult<(i64, Vec<shared::models::LowStockAlert>)> {
    let now = now_millis();
    let local = Local::now();
    let order_date = local.format("%Y-%m-%d").to_string();
    let order_time = local.format("%H:%M:%S").to_string();

    // validate() already guaranteed the total is present
    let total_cost = req.total_cost.unwrap_or_default();
    let final_total = req.final_total();

    let order_id = repository::order::insert_order(
        conn,
        &order_date,
        &order_time,
        total_cost,
        req.employee_id,
        req.customer_id,
        now,
    )
    .await?;

    let mut plan = inventory::DeductionPlan::new();
    let mut recipe_cache: HashMap<String, Vec<RecipeLine>> = HashMap::new();
    let mut total_units: i64 = 0;

    for line in &req.cart {
        let name = resolve_item_name(conn, line.name.as_deref(), line.menu_item_id).await?;
        let modifications = cart::format_modifications(line.customizations.as_ref());
        let topping_list = cart::format_toppings(line.customizations.as_ref());
        let units = line.quantity;

        // One row per physical unit, so each drink prints as its own
        // receipt line
        for _ in 0..units {
            repository::order::insert_item(
                conn,
                order_id,
                &name,
                &modifications,
                &topping_list,
                line.price,
            )
            .await?;
        }

        if !recipe_cache.contains_key(&name) {
            let lines = repository::recipe::find_lines_by_item_name(conn, &name).await?;
            recipe_cache.insert(name.clone(), lines);
        }
        for recipe_line in &recipe_cache[&name] {
            plan.add(
                &recipe_line.ingredient_name,
                recipe_line.quantity * units as f64,
            );
        }

        if let Some(customizations) = &line.customizations {
            for topping in &customizations.toppings {
                match toppings::raw_ingredient(topping) {
                    Some(raw) => plan.add(raw, units as f64),
                    None => warn!(topping = %topping, "topping has no raw ingredient mapping"),
                }
            }
        }

        total_units += units;
    }

    plan.add_consumables(total_units);
    let low_stock = inventory::apply(conn, &plan).await?;

    let payment_type = req.payment_type.as_deref().unwrap_or_default();
    repository::payment::insert(conn, order_id, payment_type, final_total, now).await?;

    if let Some(customer_id) = req.customer_id {
        let earned = points_earned(final_total);
        let redeemed = req
            .rewards
            .as_ref()
            .map(|r| r.points_redeemed)
            .unwrap_or(0);
        let rows =
            repository::customer::apply_points_delta(conn, customer_id, earned, redeemed).await?;
        if rows == 0 {
            if redeemed > 0 {
                // Balance changed between precheck and the conditional
                // update
                return Err(AppError::new(ErrorCode::InsufficientPoints));
            }
            return Err(AppError::with_message(
                ErrorCode::CustomerNotFound,
                format!("Customer {customer_id} not found"),
            ));
        }
    }

    Ok((order_id, low_stock))
}

/// Cart lines may carry the display name directly or reference the
/// catalog by id. Missing both, or an id that matches nothing, fails
/// the order.
async fn resolve_item_name(
    conn: &mut SqliteConnection,
    name: Option<&str>,
    menu_item_id: Option<i64>,
) -> AppResult<String> {
    if let Some(name) = name
        && !name.is_empty()
    {
        return Ok(name.to_string());
    }
    let Some(id) = menu_item_id else {
        return Err(AppError::with_message(
            ErrorCode::ItemNotFound,
            "Cart line has neither a name nor a menu item id",
        ));
    };
    repository::menu_item::find_name_by_id(conn, id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::ItemNotFound, format!("Menu item {id} not found"))
        })
}

/// Domain failures keep their code; anything else surfaces as a single
/// transaction-failed code with the underlying message preserved.
fn classify(err: AppError) -> AppError {
    match err.code {
        ErrorCode::ItemNotFound | ErrorCode::InsufficientPoints | ErrorCode::CustomerNotFound => {
            err
        }
        _ => AppError::with_message(ErrorCode::OrderTransactionFailed, err.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CartLine, Customizations, RewardRedemption};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();
        seed(&pool).await;
        pool
    }

    async fn seed(pool: &SqlitePool) {
        sqlx::query(
            "INSERT INTO menu_item (id, name, category, price) VALUES (1, 'Taro Milk Tea', 'Milk Tea', 5.5)",
        )
        .execute(pool)
        .await
        .unwrap();
        let ingredients: &[(i64, &str, f64)] = &[
            (1, "Taro powder", 100.0),
            (2, "Milk", 100.0),
            (3, "Tapioca pearls (raw)", 50.0),
            (4, "Ice", 100.0),
            (5, "Cups", 100.0),
            (6, "Straws", 100.0),
            (7, "Napkins", 100.0),
        ];
        for (id, name, stock) in ingredients {
            sqlx::query("INSERT INTO ingredient (id, name, stock) VALUES (?1, ?2, ?3)")
                .bind(id)
                .bind(name)
                .bind(stock)
                .execute(pool)
                .await
                .unwrap();
        }
        // Taro Milk Tea: 2 taro powder + 1 milk per drink
        sqlx::query(
            "INSERT INTO recipe (item_name, ingredient_id, quantity) VALUES ('Taro Milk Tea', 1, 2.0), ('Taro Milk Tea', 2, 1.0)",
        )
        .execute(pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO customer (id, name, points) VALUES (1, 'Mei', 200)")
            .execute(pool)
            .await
            .unwrap();
    }

    async fn stock_of(pool: &SqlitePool, name: &str) -> f64 {
        sqlx::query_scalar("SELECT stock FROM ingredient WHERE name = ?")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn points_of(pool: &SqlitePool, id: i64) -> i64 {
        sqlx::query_scalar("SELECT points FROM customer WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn taro_line(quantity: i64, customizations: Option<Customizations>) -> CartLine {
        CartLine {
            menu_item_id: Some(1),
            name: Some("Taro Milk Tea".into()),
            quantity,
            price: 5.5,
            customizations,
        }
    }

    fn basic_request(cart: Vec<CartLine>, total: f64) -> SubmitOrderRequest {
        SubmitOrderRequest {
            cart,
            total_cost: Some(total),
            customer_id: None,
            employee_id: Some(42),
            payment_type: Some("Card".into()),
            rewards: None,
        }
    }

    #[tokio::test]
    async fn two_taro_milk_teas_with_pearls_full_checkout() {
        let pool = test_pool().await;
        let customizations = Customizations {
            sweetness: Some("Normal (100%)".into()),
            ice: Some("Regular".into()),
            toppings: vec!["Pearls (tapioca balls)".into()],
        };
        let mut req = basic_request(vec![taro_line(2, Some(customizations))], 11.0);
        req.payment_type = Some("Cash".into());

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);
        assert!(resp.low_stock.is_empty());

        // 2 units: recipe twice, one pearl deduction per unit, one set of
        // consumables per unit
        assert_eq!(stock_of(&pool, "Taro powder").await, 96.0);
        assert_eq!(stock_of(&pool, "Milk").await, 98.0);
        assert_eq!(stock_of(&pool, "Tapioca pearls (raw)").await, 48.0);
        for consumable in ["Ice", "Cups", "Straws", "Napkins"] {
            assert_eq!(stock_of(&pool, consumable).await, 98.0);
        }

        let detail = repository::order::get_detail(&pool, resp.order_id)
            .await
            .unwrap();
        assert_eq!(detail.items.len(), 2);
        for item in &detail.items {
            assert_eq!(item.name, "Taro Milk Tea");
            assert_eq!(
                item.modifications,
                "Sweetness: Normal (100%), Ice: Regular"
            );
            assert_eq!(item.toppings, "Pearls (tapioca balls)");
            assert_eq!(item.price, 5.5);
        }
        assert_eq!(detail.payments.len(), 1);
        assert_eq!(detail.payments[0].method, "Cash");
        assert_eq!(detail.payments[0].amount, 11.0);
        assert_eq!(detail.payments[0].status, "Completed");
        assert_eq!(detail.order.total_cost, 11.0);
        // No customer attached: loyalty untouched
        assert_eq!(points_of(&pool, 1).await, 200);
    }

    #[tokio::test]
    async fn quantity_expands_rows_and_scales_deductions() {
        let pool = test_pool().await;
        let req = basic_request(vec![taro_line(3, None)], 16.5);

        let resp = submit_order(&pool, &req).await.unwrap();

        assert_eq!(count(&pool, "order_item").await, 3);
        assert_eq!(stock_of(&pool, "Taro powder").await, 94.0);
        assert_eq!(stock_of(&pool, "Milk").await, 97.0);
        assert_eq!(stock_of(&pool, "Cups").await, 97.0);

        let detail = repository::order::get_detail(&pool, resp.order_id)
            .await
            .unwrap();
        assert!(detail.items.iter().all(|i| i.price == 5.5));
    }

    #[tokio::test]
    async fn unknown_item_id_rolls_back_everything() {
        let pool = test_pool().await;
        let bad_line = CartLine {
            menu_item_id: Some(999),
            name: None,
            quantity: 1,
            price: 4.0,
            customizations: None,
        };
        let req = basic_request(vec![taro_line(2, None), bad_line], 15.0);

        let err = submit_order(&pool, &req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotFound);

        // The first line's work must not survive the rollback
        assert_eq!(count(&pool, "orders").await, 0);
        assert_eq!(count(&pool, "order_item").await, 0);
        assert_eq!(count(&pool, "payment").await, 0);
        assert_eq!(stock_of(&pool, "Taro powder").await, 100.0);
        assert_eq!(stock_of(&pool, "Cups").await, 100.0);
    }

    #[tokio::test]
    async fn double_submission_deducts_twice() {
        let pool = test_pool().await;
        let req = basic_request(vec![taro_line(1, None)], 5.5);

        let first = submit_order(&pool, &req).await.unwrap();
        let second = submit_order(&pool, &req).await.unwrap();
        assert_ne!(first.order_id, second.order_id);

        assert_eq!(count(&pool, "orders").await, 2);
        assert_eq!(stock_of(&pool, "Taro powder").await, 96.0);
        assert_eq!(stock_of(&pool, "Cups").await, 98.0);
    }

    #[tokio::test]
    async fn unmapped_topping_is_skipped_without_error() {
        let pool = test_pool().await;
        let customizations = Customizations {
            sweetness: None,
            ice: None,
            toppings: vec!["Crystal boba".into()],
        };
        let req = basic_request(vec![taro_line(1, Some(customizations))], 6.0);

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);
        // Recipe and consumables still deducted
        assert_eq!(stock_of(&pool, "Taro powder").await, 98.0);
        assert_eq!(stock_of(&pool, "Cups").await, 99.0);
    }

    #[tokio::test]
    async fn missing_consumable_row_does_not_fail_the_order() {
        let pool = test_pool().await;
        sqlx::query("DELETE FROM ingredient WHERE name = 'Napkins'")
            .execute(&pool)
            .await
            .unwrap();
        let req = basic_request(vec![taro_line(1, None)], 5.5);

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);
        assert_eq!(stock_of(&pool, "Cups").await, 99.0);
    }

    #[tokio::test]
    async fn stock_may_go_negative() {
        let pool = test_pool().await;
        sqlx::query("UPDATE ingredient SET stock = 1 WHERE name = 'Taro powder'")
            .execute(&pool)
            .await
            .unwrap();
        let req = basic_request(vec![taro_line(1, None)], 5.5);

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);
        assert_eq!(stock_of(&pool, "Taro powder").await, -1.0);
        // And it is reported as low stock
        assert!(
            resp.low_stock
                .iter()
                .any(|a| a.ingredient == "Taro powder" && a.remaining == -1.0)
        );
    }

    #[tokio::test]
    async fn low_stock_boundary_is_strict() {
        let pool = test_pool().await;
        // Taro powder 21 - 2 = 19: flagged. Milk 21 - 1 = 20: exactly at
        // the threshold, not flagged.
        sqlx::query("UPDATE ingredient SET stock = 21 WHERE name IN ('Taro powder', 'Milk')")
            .execute(&pool)
            .await
            .unwrap();

        let req = basic_request(vec![taro_line(1, None)], 5.5);
        let resp = submit_order(&pool, &req).await.unwrap();

        let flagged: Vec<&str> = resp
            .low_stock
            .iter()
            .map(|a| a.ingredient.as_str())
            .collect();
        assert!(flagged.contains(&"Taro powder"));
        assert!(!flagged.contains(&"Milk"));
        assert_eq!(
            resp.low_stock
                .iter()
                .find(|a| a.ingredient == "Taro powder")
                .unwrap()
                .remaining,
            19.0
        );
    }

    #[tokio::test]
    async fn loyalty_earn_and_redeem_settle_together() {
        let pool = test_pool().await;
        let mut req = basic_request(vec![taro_line(2, None)], 11.0);
        req.customer_id = Some(1);
        req.rewards = Some(RewardRedemption {
            points_redeemed: 50,
            discount: 0.5,
        });

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);

        // Final charge 11.0 - 0.5 = 10.5, earning floor(10.5) = 10.
        // 200 + 10 - 50 = 160.
        assert_eq!(points_of(&pool, 1).await, 160);
        let detail = repository::order::get_detail(&pool, resp.order_id)
            .await
            .unwrap();
        assert_eq!(detail.payments[0].amount, 10.5);
        // Header keeps the pre-discount total
        assert_eq!(detail.order.total_cost, 11.0);
    }

    #[tokio::test]
    async fn insufficient_points_rejected_before_any_write() {
        let pool = test_pool().await;
        let mut req = basic_request(vec![taro_line(1, None)], 5.5);
        req.customer_id = Some(1);
        req.rewards = Some(RewardRedemption {
            points_redeemed: 500,
            discount: 5.0,
        });

        let err = submit_order(&pool, &req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPoints);

        assert_eq!(count(&pool, "orders").await, 0);
        assert_eq!(stock_of(&pool, "Taro powder").await, 100.0);
        assert_eq!(points_of(&pool, 1).await, 200);
    }

    #[tokio::test]
    async fn redeeming_for_unknown_customer_is_rejected() {
        let pool = test_pool().await;
        let mut req = basic_request(vec![taro_line(1, None)], 5.5);
        req.customer_id = Some(77);
        req.rewards = Some(RewardRedemption {
            points_redeemed: 10,
            discount: 0.1,
        });

        let err = submit_order(&pool, &req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        assert_eq!(count(&pool, "orders").await, 0);
    }

    #[tokio::test]
    async fn earn_only_order_credits_points() {
        let pool = test_pool().await;
        let mut req = basic_request(vec![taro_line(1, None)], 5.5);
        req.customer_id = Some(1);

        submit_order(&pool, &req).await.unwrap();
        // floor(5.5) = 5 earned
        assert_eq!(points_of(&pool, 1).await, 205);
    }

    #[tokio::test]
    async fn unknown_customer_on_earn_only_order_rolls_back() {
        let pool = test_pool().await;
        let mut req = basic_request(vec![taro_line(1, None)], 5.5);
        req.customer_id = Some(404);

        let err = submit_order(&pool, &req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        assert_eq!(count(&pool, "orders").await, 0);
        assert_eq!(stock_of(&pool, "Taro powder").await, 100.0);
    }

    #[tokio::test]
    async fn name_only_line_without_catalog_entry_still_sells() {
        let pool = test_pool().await;
        // Seasonal special sold by name, no catalog row, no recipe:
        // consumables still deplete
        let line = CartLine {
            menu_item_id: None,
            name: Some("Winter Melon Special".into()),
            quantity: 1,
            price: 7.0,
            customizations: None,
        };
        let req = basic_request(vec![line], 7.0);

        let resp = submit_order(&pool, &req).await.unwrap();
        assert!(resp.success);
        assert_eq!(stock_of(&pool, "Cups").await, 99.0);
        assert_eq!(stock_of(&pool, "Taro powder").await, 100.0);
    }

    #[tokio::test]
    async fn empty_cart_fails_validation() {
        let pool = test_pool().await;
        let req = basic_request(vec![], 0.0);
        let err = submit_order(&pool, &req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn earned_points_floor_and_clamp() {
        assert_eq!(points_earned(10.99), 10);
        assert_eq!(points_earned(0.5), 0);
        assert_eq!(points_earned(-3.0), 0);
    }
}
