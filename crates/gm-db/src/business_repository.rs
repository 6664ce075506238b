use crate::entity::datetime_from_unix;
use crate::{DbError, Result as DbErrorResult};

use gm_core::{Business, BusinessStatus, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Businesses are the tenants themselves, so this repository is the one
/// persistence type that does not go through the tenant-scoped contract.
pub struct BusinessRepository {
    pool: SqlitePool,
}

impl BusinessRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Business> {
        let status: String = row.try_get("status")?;

        Ok(Business {
            id: Some(row.try_get("business_id")?),
            name: row.try_get("name")?,
            status: BusinessStatus::from_str(&status)?,
            created_at: datetime_from_unix("businesses.created_at", row.try_get("created_at")?)?,
            updated_at: datetime_from_unix("businesses.updated_at", row.try_get("updated_at")?)?,
        })
    }

    pub async fn create(&self, business: &mut Business) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO businesses (name, status, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(business.name.as_str())
        .bind(business.status.as_str())
        .bind(business.created_at.timestamp())
        .bind(business.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        business.id = Some(id);
        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Business>> {
        let row = sqlx::query(
            "SELECT business_id, name, status, created_at, updated_at FROM businesses WHERE business_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn get(&self, id: i64) -> DbErrorResult<Business> {
        let caller = Location::caller();
        self.find_by_id(id).await?.ok_or(DbError::EntityNotFound {
            entity: "business",
            id,
            location: ErrorLocation::from(caller),
        })
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Business>> {
        let rows = sqlx::query(
            "SELECT business_id, name, status, created_at, updated_at FROM businesses ORDER BY business_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }
}
