use crate::entity::{TenantEntity, datetime_from_unix};
use crate::repository::TenantScopedRepository;
use crate::service::TenantScopedService;
use crate::Result as DbErrorResult;

use gm_core::{BusinessId, Locker, LockerStatus, TenantContext};

use std::str::FromStr;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

pub type LockerRepository = TenantScopedRepository<Locker>;
pub type LockerService = TenantScopedService<Locker>;

impl TenantEntity for Locker {
    const ENTITY: &'static str = "locker";
    const TABLE: &'static str = "lockers";
    const ID_COLUMN: &'static str = "locker_id";
    const COLUMNS: &'static [&'static str] = &[
        "locker_id",
        "business_id",
        "locker_number",
        "status",
        "created_at",
        "updated_at",
    ];
    const UPDATE_COLUMNS: &'static [&'static str] = &["locker_number", "status", "updated_at"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn business_id(&self) -> Option<BusinessId> {
        self.business_id
    }

    fn set_business_id(&mut self, business_id: BusinessId) {
        self.business_id = Some(business_id);
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        let business_id: i64 = row.try_get("business_id")?;
        let status: String = row.try_get("status")?;

        Ok(Locker {
            id: Some(row.try_get("locker_id")?),
            business_id: Some(BusinessId::new(business_id)?),
            locker_number: row.try_get("locker_number")?,
            status: LockerStatus::from_str(&status)?,
            created_at: datetime_from_unix("lockers.created_at", row.try_get("created_at")?)?,
            updated_at: datetime_from_unix("lockers.updated_at", row.try_get("updated_at")?)?,
        })
    }

    fn bind_insert<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.locker_number)
            .bind(self.status.as_str())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.locker_number)
            .bind(self.status.as_str())
            .bind(self.updated_at.timestamp())
    }
}

impl LockerRepository {
    /// Locker lookup by number within the active business.
    pub async fn find_by_number(&self, locker_number: i32) -> DbErrorResult<Option<Locker>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM lockers WHERE locker_number = ? AND business_id = ?",
            Locker::COLUMNS.join(", ")
        );

        let row = sqlx::query(&sql)
            .bind(locker_number)
            .bind(business.get())
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(Locker::from_row).transpose()
    }
}
