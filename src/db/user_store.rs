use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::user::{NewUser, User, UserUpdate},
};

/// User store for database operations
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    /// Create a new UserStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all users, newest first
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(users)
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Utilisateur non trouvé".into()))?;

        Ok(user)
    }

    /// Get a user by email, if any
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }

    /// Get a user by username, if any
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }

    /// Create a user; `password_hash` must already be hashed
    pub async fn create(&self, user: &NewUser, password_hash: &str) -> Result<User> {
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO users
                (username, email, password, first_name, last_name, phone,
                 user_type, location, profile_image, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.user_type)
        .bind(&user.location)
        .bind(&user.profile_image)
        .bind(user.is_active.unwrap_or(true))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?
        .last_insert_rowid();

        self.get_by_id(id).await
    }

    /// Apply a partial update to a user
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<User> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE users SET updated_at = ");
        qb.push_bind(Utc::now());

        if let Some(first_name) = &update.first_name {
            qb.push(", first_name = ").push_bind(first_name);
        }
        if let Some(last_name) = &update.last_name {
            qb.push(", last_name = ").push_bind(last_name);
        }
        if let Some(phone) = &update.phone {
            qb.push(", phone = ").push_bind(phone);
        }
        if let Some(location) = &update.location {
            qb.push(", location = ").push_bind(location);
        }
        if let Some(profile_image) = &update.profile_image {
            qb.push(", profile_image = ").push_bind(profile_image);
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
}
