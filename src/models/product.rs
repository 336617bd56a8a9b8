use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// Listing behavior: immediate checkout or inquiry-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SaleMode {
    Direct,
    Contact,
}

/// Database product model
///
/// A product is publicly visible only while both `is_active` (the farmer's
/// own toggle) and `is_approved` (the admin moderation flag) are set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub farmer_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub quantity: i64,
    pub available_quantity: i64,
    pub sale_mode: SaleMode,
    pub location: String,
    pub province: String,
    pub images: Option<Json<Vec<String>>>,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload
///
/// `available_quantity` is always initialized to `quantity` on insert and
/// `is_approved` starts false, whatever the client sends.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub farmer_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub quantity: i64,
    #[serde(default)]
    pub available_quantity: Option<i64>,
    pub sale_mode: SaleMode,
    pub location: String,
    pub province: String,
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial product update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub quantity: Option<i64>,
    pub available_quantity: Option<i64>,
    pub sale_mode: Option<SaleMode>,
    pub location: Option<String>,
    pub province: Option<String>,
    pub images: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Optional listing filters, AND-ed together
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub category: Option<String>,
    pub province: Option<String>,
    pub search: Option<String>,
    pub sale_mode: Option<SaleMode>,
    pub is_active: Option<bool>,
    pub is_approved: Option<bool>,
}
