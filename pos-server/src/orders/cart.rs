//! Cart validation and line-item formatting
//!
//! Pure functions: the request validator runs before any transaction
//! opens and has no side effects; the formatters produce the
//! denormalized modification/topping strings persisted on each line
//! item row.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Customizations, SubmitOrderRequest};

/// Validate order-level fields: non-empty cart, present non-negative
/// total, present payment type, per-line quantity >= 1.
///
/// The redemption preconditions (customer exists, balance covers the
/// points) need a database read and live in the submit coordinator.
pub fn validate(req: &SubmitOrderRequest) -> AppResult<()> {
    if req.cart.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyCart));
    }

    match req.total_cost {
        None => {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "Total cost is required",
            ));
        }
        Some(total) if total < 0.0 => {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "Total cost must not be negative",
            ));
        }
        Some(_) => {}
    }

    match req.payment_type.as_deref() {
        None | Some("") => return Err(AppError::new(ErrorCode::PaymentTypeMissing)),
        Some(_) => {}
    }

    for (index, line) in req.cart.iter().enumerate() {
        if line.quantity < 1 {
            return Err(AppError::invalid_request("Line quantity must be at least 1")
                .with_detail("line", index as i64));
        }
        if line.price < 0.0 {
            return Err(AppError::invalid_request("Line price must not be negative")
                .with_detail("line", index as i64));
        }
    }

    if let Some(rewards) = &req.rewards
        && rewards.points_redeemed < 0
    {
        return Err(AppError::invalid_request(
            "Points redeemed must not be negative",
        ));
    }

    Ok(())
}

/// Human-readable modifications string, e.g.
/// "Sweetness: Normal (100%), Ice: Regular". Empty when nothing was
/// customized.
pub fn format_modifications(customizations: Option<&Customizations>) -> String {
    let Some(c) = customizations else {
        return String::new();
    };
    let mut parts = Vec::with_capacity(2);
    if let Some(sweetness) = c.sweetness.as_deref()
        && !sweetness.is_empty()
    {
        parts.push(format!("Sweetness: {sweetness}"));
    }
    if let Some(ice) = c.ice.as_deref()
        && !ice.is_empty()
    {
        parts.push(format!("Ice: {ice}"));
    }
    parts.join(", ")
}

/// Comma-joined topping names, empty when none were selected.
pub fn format_toppings(customizations: Option<&Customizations>) -> String {
    customizations
        .map(|c| c.toppings.join(", "))
        .unwrap_or_default()
}
