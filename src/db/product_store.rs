use chrono::Utc;
use sqlx::types::Json;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::product::{NewProduct, Product, ProductFilters, ProductUpdate},
};

/// Product store for database operations
#[derive(Clone)]
pub struct ProductStore {
    pool: DbPool,
}

impl ProductStore {
    /// Create a new ProductStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a product by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Produit non trouvé".into()))?;

        Ok(product)
    }

    /// Get all products of one farmer, any approval state, newest first
    pub async fn get_by_farmer(&self, farmer_id: i64) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE farmer_id = ? ORDER BY created_at DESC",
        )
        .bind(farmer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(products)
    }

    /// List products matching the AND-ed optional filters, newest first
    pub async fn get_all(&self, filters: &ProductFilters) -> Result<Vec<Product>> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("SELECT * FROM products WHERE 1 = 1");

        if let Some(is_active) = filters.is_active {
            qb.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(is_approved) = filters.is_approved {
            qb.push(" AND is_approved = ").push_bind(is_approved);
        }
        if let Some(category) = &filters.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(province) = &filters.province {
            qb.push(" AND province = ").push_bind(province);
        }
        if let Some(sale_mode) = filters.sale_mode {
            qb.push(" AND sale_mode = ").push_bind(sale_mode);
        }
        if let Some(search) = &filters.search {
            qb.push(" AND name LIKE ").push_bind(format!("%{}%", search));
        }

        qb.push(" ORDER BY created_at DESC");

        let products = qb
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(products)
    }

    /// Create a product; stock starts at the full quantity, unapproved
    pub async fn create(&self, product: &NewProduct) -> Result<Product> {
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO products
                (farmer_id, name, description, category, price, unit, quantity,
                 available_quantity, sale_mode, location, province, images,
                 is_active, is_approved, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(product.farmer_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.unit)
        .bind(product.quantity)
        .bind(product.quantity)
        .bind(product.sale_mode)
        .bind(&product.location)
        .bind(&product.province)
        .bind(product.images.clone().map(Json))
        .bind(product.is_active.unwrap_or(true))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?
        .last_insert_rowid();

        self.get_by_id(id).await
    }

    /// Apply a partial update to a product
    pub async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Product> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE products SET updated_at = ");
        qb.push_bind(Utc::now());

        if let Some(name) = &update.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(description) = &update.description {
            qb.push(", description = ").push_bind(description);
        }
        if let Some(category) = &update.category {
            qb.push(", category = ").push_bind(category);
        }
        if let Some(price) = update.price {
            qb.push(", price = ").push_bind(price);
        }
        if let Some(unit) = &update.unit {
            qb.push(", unit = ").push_bind(unit);
        }
        if let Some(quantity) = update.quantity {
            qb.push(", quantity = ").push_bind(quantity);
        }
        if let Some(available_quantity) = update.available_quantity {
            qb.push(", available_quantity = ").push_bind(available_quantity);
        }
        if let Some(sale_mode) = update.sale_mode {
            qb.push(", sale_mode = ").push_bind(sale_mode);
        }
        if let Some(location) = &update.location {
            qb.push(", location = ").push_bind(location);
        }
        if let Some(province) = &update.province {
            qb.push(", province = ").push_bind(province);
        }
        if let Some(images) = &update.images {
            qb.push(", images = ").push_bind(Json(images.clone()));
        }
        if let Some(is_active) = update.is_active {
            qb.push(", is_active = ").push_bind(is_active);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_by_id(id).await
    }

    /// Mark a product as approved by an admin
    pub async fn approve(&self, id: i64) -> Result<Product> {
        let result = sqlx::query("UPDATE products SET is_approved = 1, updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produit non trouvé".into()));
        }

        self.get_by_id(id).await
    }

    /// Delete a product by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produit non trouvé".into()));
        }

        Ok(())
    }
}
