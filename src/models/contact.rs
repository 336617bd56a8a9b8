use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::UserContact;

/// Inquiry lifecycle: pending -> contacted -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Contacted,
    Completed,
}

/// Database contact model: a buyer inquiry about a contact-mode product
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub message: String,
    pub buyer_phone: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub message: String,
    pub buyer_phone: Option<String>,
}

/// Partial contact update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub status: Option<ContactStatus>,
    pub message: Option<String>,
    pub buyer_phone: Option<String>,
}

/// Product name shown next to an inquiry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProductInfo {
    pub id: i64,
    pub name: String,
}

/// Inquiry joined with the buyer's contact info and the product name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactWithDetails {
    #[serde(flatten)]
    pub contact: Contact,
    pub buyer: UserContact,
    pub product: ContactProductInfo,
}
