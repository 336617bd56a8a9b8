use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::product::Product;
use crate::models::user::UserContact;

/// Order lifecycle: pending -> confirmed -> delivered, or cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

/// Database order model
///
/// `total_price` is computed from the product's unit price at creation time
/// and never recalculated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub quantity: i64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload; the server computes the total price itself
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub quantity: i64,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
}

/// Partial order update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
}

/// Order joined with its product and the farmer's contact info, for buyers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerOrder {
    #[serde(flatten)]
    pub order: Order,
    pub product: Product,
    pub farmer: UserContact,
}

/// Order joined with its product and the buyer's contact info, for farmers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerOrder {
    #[serde(flatten)]
    pub order: Order,
    pub product: Product,
    pub buyer: UserContact,
}
