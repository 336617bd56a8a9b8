use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database review model, rating is 1 to 5
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub buyer_id: i64,
    pub product_id: i64,
    pub farmer_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
}

/// Name of the reviewer shown next to a review
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerInfo {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Review joined with the buyer's name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithBuyer {
    #[serde(flatten)]
    pub review: Review,
    pub buyer: ReviewerInfo,
}
