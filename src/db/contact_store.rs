use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::contact::{
        Contact, ContactProductInfo, ContactUpdate, ContactWithDetails, NewContact,
    },
    models::user::{User, UserContact},
};

/// Contact store for database operations
#[derive(Clone)]
pub struct ContactStore {
    pool: DbPool,
}

impl ContactStore {
    /// Create a new ContactStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a contact by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Contact non trouvé".into()))?;

        Ok(contact)
    }

    /// Create a contact inquiry
    pub async fn create(&self, contact: &NewContact) -> Result<Contact> {
        let id = sqlx::query(
            r#"
            INSERT INTO contacts
                (buyer_id, product_id, farmer_id, message, buyer_phone, status, created_at)
            VALUES (?, ?, ?, ?, ?, 'pending', ?)
            "#,
        )
        .bind(contact.buyer_id)
        .bind(contact.product_id)
        .bind(contact.farmer_id)
        .bind(&contact.message)
        .bind(&contact.buyer_phone)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?
        .last_insert_rowid();

        self.get_by_id(id).await
    }

    /// Get a farmer's inquiries with buyer contact info and product name
    pub async fn get_by_farmer(&self, farmer_id: i64) -> Result<Vec<ContactWithDetails>> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts WHERE farmer_id = ? ORDER BY created_at DESC",
        )
        .bind(farmer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut result = Vec::with_capacity(contacts.len());
        for contact in contacts {
            let buyer = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                .bind(contact.buyer_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

            let product = sqlx::query_as::<_, (i64, String)>(
                "SELECT id, name FROM products WHERE id = ?",
            )
            .bind(contact.product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

            let (Some(buyer), Some((product_id, product_name))) = (buyer, product) else {
                continue;
            };

            result.push(ContactWithDetails {
                contact,
                buyer: UserContact::from(buyer),
                product: ContactProductInfo {
                    id: product_id,
                    name: product_name,
                },
            });
        }

        Ok(result)
    }

    /// Apply a partial update to a contact
    pub async fn update(&self, id: i64, update: &ContactUpdate) -> Result<Contact> {
        let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE contacts SET id = id");

        if let Some(status) = update.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(message) = &update.message {
            qb.push(", message = ").push_bind(message);
        }
        if let Some(buyer_phone) = &update.buyer_phone {
            qb.push(", buyer_phone = ").push_bind(buyer_phone);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_by_id(id).await
    }
}
