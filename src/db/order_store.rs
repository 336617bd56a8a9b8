use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::order::{BuyerOrder, FarmerOrder, NewOrder, Order, OrderUpdate},
    models::product::Product,
    models::user::{User, UserContact},
};

/// Order store for database operations
#[derive(Clone)]
pub struct OrderStore {
    pool: DbPool,
}

impl OrderStore {
    /// Create a new OrderStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get an order by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Order> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Commande non trouvée".into()))?;

        Ok(order)
    }

    /// Create an order and decrement the product's stock in one transaction
    ///
    /// The decrement is conditional on enough stock remaining; concurrent
    /// orders cannot drive `available_quantity` negative. The total price is
    /// `unit_price * quantity`, fixed at creation.
    pub async fn create(&self, order: &NewOrder, unit_price: f64) -> Result<Order> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query(
            r#"
            UPDATE products
            SET available_quantity = available_quantity - ?, updated_at = ?
            WHERE id = ? AND available_quantity >= ?
            "#,
        )
        .bind(order.quantity)
        .bind(now)
        .bind(order.product_id)
        .bind(order.quantity)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if updated.rows_affected() == 0 {
            return Err(AppError::BadRequest(
                "Quantité insuffisante disponible".into(),
            ));
        }

        let total_price = unit_price * order.quantity as f64;

        let id = sqlx::query(
            r#"
            INSERT INTO orders
                (buyer_id, product_id, farmer_id, quantity, total_price,
                 status, delivery_address, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 'pending', ?, ?, ?, ?)
            "#,
        )
        .bind(order.buyer_id)
        .bind(order.product_id)
        .bind(order.farmer_id)
        .bind(order.quantity)
        .bind(total_price)
        .bind(&order.delivery_address)
        .bind(&order.notes)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?
        .last_insert_rowid();

        let created = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(created)
    }

    /// Get a buyer's orders with the product and the farmer's contact info
    pub async fn get_by_buyer(&self, buyer_id: i64) -> Result<Vec<BuyerOrder>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE buyer_id = ? ORDER BY created_at DESC",
        )
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let Some((product, counterpart)) =
                self.resolve_details(order.product_id, order.farmer_id).await?
            else {
                continue;
            };
            result.push(BuyerOrder {
                order,
                product,
                farmer: counterpart,
            });
        }

        Ok(result)
    }

    /// Get a farmer's orders with the product and the buyer's contact info
    pub async fn get_by_farmer(&self, farmer_id: i64) -> Result<Vec<FarmerOrder>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE farmer_id = ? ORDER BY created_at DESC",
        )
        .bind(farmer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let Some((product, counterpart)) =
                self.resolve_details(order.product_id, order.buyer_id).await?
            else {
                continue;
            };
            result.push(FarmerOrder {
                order,
                product,
                buyer: counterpart,
            });
        }

        Ok(result)
    }

    /// Apply a partial update to an order
    pub async fn update(&self, id: i64, update: &OrderUpdate) -> Result<Order> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE orders SET updated_at = ");
        qb.push_bind(Utc::now());

        if let Some(status) = update.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(delivery_address) = &update.delivery_address {
            qb.push(", delivery_address = ").push_bind(delivery_address);
        }
        if let Some(notes) = &update.notes {
            qb.push(", notes = ").push_bind(notes);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_by_id(id).await
    }

    // Resolve the product and counterpart user of an order; None when either
    // referenced row no longer exists (same tolerance as a LEFT JOIN).
    async fn resolve_details(
        &self,
        product_id: i64,
        user_id: i64,
    ) -> Result<Option<(Product, UserContact)>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(match (product, user) {
            (Some(product), Some(user)) => Some((product, UserContact::from(user))),
            _ => None,
        })
    }
}
