use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::staff::errors::StaffError;
use crate::domain::staff::models::EmailAddress;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffAccount;
use crate::domain::staff::models::StaffId;
use crate::domain::staff::ports::StaffRepository;

/// Postgres adapter for one role family's directory.
///
/// All four families share this adapter; the role picks the backing
/// table. Queries are runtime-bound because the table name cannot be a
/// bind parameter.
pub struct PostgresStaffRepository {
    pool: PgPool,
    table: &'static str,
}

impl PostgresStaffRepository {
    pub fn new(pool: PgPool, role: Role) -> Self {
        let table = match role {
            Role::Admin => "admins",
            Role::Director => "directors",
            Role::Kadr => "kadrs",
            Role::User => "users",
        };

        Self { pool, table }
    }

    fn map_row(row: &PgRow) -> Result<StaffAccount, StaffError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let first_name: String = row
            .try_get("first_name")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let last_name: String = row
            .try_get("last_name")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        Ok(StaffAccount {
            id: StaffId(id),
            first_name,
            last_name,
            email: EmailAddress::new(email)?,
            password_hash,
            role: role.parse()?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn create(&self, account: StaffAccount) -> Result<StaffAccount, StaffError> {
        let sql = format!(
            "INSERT INTO {} (id, first_name, last_name, email, password_hash, role, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            self.table
        );

        sqlx::query(&sql)
            .bind(account.id.0)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.email.as_str())
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Uniqueness backstop behind the service-level pre-check
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return StaffError::EmailAlreadyExists(
                            account.email.as_str().to_string(),
                        );
                    }
                }
                StaffError::DatabaseError(e.to_string())
            })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &StaffId) -> Result<Option<StaffAccount>, StaffError> {
        let sql = format!(
            "SELECT id, first_name, last_name, email, password_hash, role, created_at, updated_at \
             FROM {} WHERE id = $1",
            self.table
        );

        let row = sqlx::query(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, StaffError> {
        let sql = format!(
            "SELECT id, first_name, last_name, email, password_hash, role, created_at, updated_at \
             FROM {} WHERE email = $1",
            self.table
        );

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<StaffAccount>, StaffError> {
        let sql = format!(
            "SELECT id, first_name, last_name, email, password_hash, role, created_at, updated_at \
             FROM {} ORDER BY created_at DESC",
            self.table
        );

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update(&self, account: StaffAccount) -> Result<StaffAccount, StaffError> {
        let sql = format!(
            "UPDATE {} SET first_name = $2, last_name = $3, email = $4, password_hash = $5, \
             updated_at = $6 WHERE id = $1",
            self.table
        );

        let result = sqlx::query(&sql)
            .bind(account.id.0)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.email.as_str())
            .bind(&account.password_hash)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StaffError::NotFound(account.id.to_string()));
        }

        Ok(account)
    }

    async fn delete(&self, id: &StaffId) -> Result<(), StaffError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);

        let result = sqlx::query(&sql)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| StaffError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StaffError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
