use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::{CreateProduct, Product};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_products).post(create_product))
}

/// GET /products - the catalog
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, AppError> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(products))
}

/// POST /products
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
        .bind(&input.name)
        .bind(input.price)
        .execute(&state.db)
        .await?;

    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(&state.db)
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}
