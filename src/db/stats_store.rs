use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::stats::Stats,
};

/// Aggregate counters for the public stats endpoint
#[derive(Clone)]
pub struct StatsStore {
    pool: DbPool,
}

impl StatsStore {
    /// Create a new StatsStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Count farmers, public products, orders and covered provinces
    pub async fn get_stats(&self) -> Result<Stats> {
        let total_farmers = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE user_type = 'farmer'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let total_products = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE is_active = 1 AND is_approved = 1",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let total_orders = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let total_provinces =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT province) FROM products")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(Stats {
            total_farmers,
            total_products,
            total_orders,
            total_provinces,
        })
    }
}
