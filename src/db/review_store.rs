use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::review::{NewReview, Review, ReviewWithBuyer, ReviewerInfo},
    models::user::User,
};

/// Review store for database operations
#[derive(Clone)]
pub struct ReviewStore {
    pool: DbPool,
}

impl ReviewStore {
    /// Create a new ReviewStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a review
    pub async fn create(&self, review: &NewReview) -> Result<Review> {
        let id = sqlx::query(
            r#"
            INSERT INTO reviews
                (buyer_id, product_id, farmer_id, rating, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.buyer_id)
        .bind(review.product_id)
        .bind(review.farmer_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?
        .last_insert_rowid();

        let created = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(created)
    }

    /// Get a product's reviews with the reviewer's name, newest first
    pub async fn get_by_product(&self, product_id: i64) -> Result<Vec<ReviewWithBuyer>> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE product_id = ? ORDER BY created_at DESC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut result = Vec::with_capacity(reviews.len());
        for review in reviews {
            let Some(buyer) = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                .bind(review.buyer_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
            else {
                continue;
            };
            result.push(ReviewWithBuyer {
                review,
                buyer: ReviewerInfo {
                    id: buyer.id,
                    first_name: buyer.first_name,
                    last_name: buyer.last_name,
                },
            });
        }

        Ok(result)
    }

    /// Average rating of a product, 0 when it has no reviews
    pub async fn average_rating(&self, product_id: i64) -> Result<f64> {
        let avg = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(rating) FROM reviews WHERE product_id = ?",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(avg.unwrap_or(0.0))
    }
}
