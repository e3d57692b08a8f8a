use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Account, CreateAccount, Credit};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route("/{uid}", get(get_account).delete(delete_account))
        .route("/{uid}/credit", post(credit_account))
}

pub(crate) async fn fetch_account(db: &SqlitePool, uid: &str) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE uid = ?")
        .bind(uid)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::AccountNotFound)
}

/// GET /accounts - list accounts with balances
async fn list_accounts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts =
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY last_name, first_name")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(accounts))
}

/// GET /accounts/:uid - single account lookup
async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<Account>, AppError> {
    fetch_account(&state.db, &uid).await.map(Json)
}

/// POST /accounts - open an account for a card, balance starts at zero
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateAccount>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let result = sqlx::query(
        "INSERT INTO accounts (uid, last_name, first_name, address, balance) VALUES (?, ?, ?, ?, 0)",
    )
    .bind(&input.uid)
    .bind(&input.last_name)
    .bind(&input.first_name)
    .bind(&input.address)
    .execute(&state.db)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::DuplicateAccount)
        }
        Err(e) => return Err(e.into()),
    }

    let account = fetch_account(&state.db, &input.uid).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// DELETE /accounts/:uid
async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM accounts WHERE uid = ?")
        .bind(&uid)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::AccountNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /accounts/:uid/credit - top the balance up
async fn credit_account(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(input): Json<Credit>,
) -> Result<Json<Account>, AppError> {
    if input.amount.is_nan() || input.amount <= 0.0 {
        return Err(AppError::NonPositiveAmount);
    }

    let result = sqlx::query("UPDATE accounts SET balance = balance + ? WHERE uid = ?")
        .bind(input.amount)
        .bind(&uid)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::AccountNotFound);
    }

    let account = fetch_account(&state.db, &uid).await?;
    Ok(Json(account))
}
