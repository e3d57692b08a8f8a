use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};

use super::accounts::fetch_account;
use crate::error::AppError;
use crate::models::{Account, Purchase};
use crate::state::AppState;

// Nested under /accounts alongside the account routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/{uid}/purchase", post(purchase))
}

/// POST /accounts/:uid/purchase - debit the card for one product
async fn purchase(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(input): Json<Purchase>,
) -> Result<Json<Account>, AppError> {
    let price: f64 = sqlx::query_scalar("SELECT price FROM products WHERE id = ?")
        .bind(input.product_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::ProductNotFound)?;

    // 404 for an unknown card, 409 for a known one without funds.
    fetch_account(&state.db, &uid).await?;

    // The debit is one conditional statement, so it cannot drive the
    // balance negative and never touches the row when funds are short.
    let debit =
        sqlx::query("UPDATE accounts SET balance = balance - ? WHERE uid = ? AND balance >= ?")
            .bind(price)
            .bind(&uid)
            .bind(price)
            .execute(&state.db)
            .await?;

    if debit.rows_affected() == 0 {
        return Err(AppError::InsufficientFunds);
    }

    let account = fetch_account(&state.db, &uid).await?;
    Ok(Json(account))
}
