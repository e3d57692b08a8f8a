use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Account {
    pub uid: String,
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    pub uid: String,
    pub last_name: String,
    pub first_name: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Credit {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct Purchase {
    pub product_id: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct Scan {
    pub uid: String,
}
