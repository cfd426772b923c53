use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::{AuthError, Customer, CustomerCredential, CustomerRepository};

use super::database_error;

#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CustomerRecord {
    id: i64,
    name: String,
    phone: String,
    password_hash: String,
    active: bool,
    created_at: DateTime<Utc>,
}

impl From<CustomerRecord> for Customer {
    fn from(row: CustomerRecord) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            phone: row.phone,
            password_hash: row.password_hash,
            active: row.active,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct CredentialRecord {
    id: i64,
    password_hash: String,
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    async fn find_customer_credential(
        &self,
        phone: &str,
    ) -> Result<Option<CustomerCredential>, AuthError> {
        let row: Option<CredentialRecord> =
            sqlx::query_as("SELECT id, password_hash FROM customers WHERE phone = ?")
                .bind(phone)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_customer_credential", &e))?;

        Ok(row.map(|r| CustomerCredential {
            customer_id: r.id,
            password_hash: r.password_hash,
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn all_customers(&self) -> Result<Vec<Customer>, AuthError> {
        let rows: Vec<CustomerRecord> = sqlx::query_as(
            "SELECT id, name, phone, password_hash, active, created_at FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("all_customers", &e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn active_customers(&self) -> Result<Vec<Customer>, AuthError> {
        let rows: Vec<CustomerRecord> = sqlx::query_as(
            "SELECT id, name, phone, password_hash, active, created_at FROM customers WHERE active ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("active_customers", &e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_customer_by_id(&self, id: i64) -> Result<Option<Customer>, AuthError> {
        let row: Option<CustomerRecord> = sqlx::query_as(
            "SELECT id, name, phone, password_hash, active, created_at FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("find_customer_by_id", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn set_customer_active(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<Customer>, AuthError> {
        let row: Option<CustomerRecord> = sqlx::query_as(
            "UPDATE customers SET active = ? WHERE id = ? RETURNING id, name, phone, password_hash, active, created_at",
        )
        .bind(active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("set_customer_active", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete_customer(&self, id: i64) -> Result<Option<Customer>, AuthError> {
        let row: Option<CustomerRecord> = sqlx::query_as(
            "DELETE FROM customers WHERE id = ? RETURNING id, name, phone, password_hash, active, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("delete_customer", &e))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password_hash), err))]
    async fn create_customer(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Customer, AuthError> {
        let row: CustomerRecord = sqlx::query_as(
            "INSERT INTO customers (name, phone, password_hash) VALUES (?, ?, ?) RETURNING id, name, phone, password_hash, active, created_at",
        )
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("create_customer", &e))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password_hash), err))]
    async fn update_customer(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Option<Customer>, AuthError> {
        let row: Option<CustomerRecord> = sqlx::query_as(
            "UPDATE customers SET name = ?, phone = ?, password_hash = ? WHERE id = ? RETURNING id, name, phone, password_hash, active, created_at",
        )
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("update_customer", &e))?;

        Ok(row.map(Into::into))
    }
}
