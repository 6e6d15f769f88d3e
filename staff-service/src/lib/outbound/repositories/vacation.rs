use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::staff::models::StaffId;
use crate::domain::vacation::errors::VacationError;
use crate::domain::vacation::models::Vacation;
use crate::domain::vacation::models::VacationId;
use crate::domain::vacation::ports::VacationRepository;

/// Postgres adapter for vacation records.
pub struct PostgresVacationRepository {
    pool: PgPool,
}

impl PostgresVacationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<Vacation, VacationError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?;
        let user_id: Uuid = row
            .try_get("user_id")
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?;
        let start_date: NaiveDate = row
            .try_get("start_date")
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?;
        let end_date: NaiveDate = row
            .try_get("end_date")
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?;

        Ok(Vacation {
            id: VacationId(id),
            user_id: StaffId(user_id),
            start_date,
            end_date,
            status: status.parse()?,
        })
    }
}

#[async_trait]
impl VacationRepository for PostgresVacationRepository {
    async fn insert(&self, vacation: Vacation) -> Result<Vacation, VacationError> {
        sqlx::query(
            "INSERT INTO vacations (id, user_id, start_date, end_date, status) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(vacation.id.0)
        .bind(vacation.user_id.0)
        .bind(vacation.start_date)
        .bind(vacation.end_date)
        .bind(vacation.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| VacationError::DatabaseError(e.to_string()))?;

        Ok(vacation)
    }

    async fn find_by_id(&self, id: &VacationId) -> Result<Option<Vacation>, VacationError> {
        let row = sqlx::query(
            "SELECT id, user_id, start_date, end_date, status FROM vacations WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VacationError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Vacation>, VacationError> {
        let rows = sqlx::query(
            "SELECT id, user_id, start_date, end_date, status FROM vacations \
             ORDER BY start_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VacationError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update(&self, vacation: Vacation) -> Result<Vacation, VacationError> {
        let result = sqlx::query(
            "UPDATE vacations SET start_date = $2, end_date = $3, status = $4 WHERE id = $1",
        )
        .bind(vacation.id.0)
        .bind(vacation.start_date)
        .bind(vacation.end_date)
        .bind(vacation.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| VacationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VacationError::NotFound(vacation.id.to_string()));
        }

        Ok(vacation)
    }
}
