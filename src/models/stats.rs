use serde::{Deserialize, Serialize};

/// Marketplace-wide counters shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_farmers: i64,
    pub total_products: i64,
    pub total_orders: i64,
    pub total_provinces: i64,
}
