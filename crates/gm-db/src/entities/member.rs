use crate::entity::{TenantEntity, date_from_str, datetime_from_unix};
use crate::repository::TenantScopedRepository;
use crate::service::TenantScopedService;
use crate::Result as DbErrorResult;

use gm_core::{BusinessId, Gender, Member, MemberStatus, TenantContext};

use std::str::FromStr;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

pub type MemberRepository = TenantScopedRepository<Member>;
pub type MemberService = TenantScopedService<Member>;

impl TenantEntity for Member {
    const ENTITY: &'static str = "member";
    const TABLE: &'static str = "members";
    const ID_COLUMN: &'static str = "member_id";
    const COLUMNS: &'static [&'static str] = &[
        "member_id",
        "business_id",
        "name",
        "phone",
        "gender",
        "birth_date",
        "memo",
        "status",
        "created_at",
        "updated_at",
    ];
    const UPDATE_COLUMNS: &'static [&'static str] = &[
        "name",
        "phone",
        "gender",
        "birth_date",
        "memo",
        "status",
        "updated_at",
    ];

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
        let gender: Option<String> = row.try_get("gender")?;
        let birth_date: Option<String> = row.try_get("birth_date")?;
        let status: String = row.try_get("status")?;

        Ok(Member {
            id: Some(row.try_get("member_id")?),
            business_id: Some(BusinessId::new(business_id)?),
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            gender: gender
                .as_deref()
                .map(Gender::from_str)
                .transpose()?,
            birth_date: birth_date
                .as_deref()
                .map(|value| date_from_str("members.birth_date", value))
                .transpose()?,
            memo: row.try_get("memo")?,
            status: MemberStatus::from_str(&status)?,
            created_at: datetime_from_unix("members.created_at", row.try_get("created_at")?)?,
            updated_at: datetime_from_unix("members.updated_at", row.try_get("updated_at")?)?,
        })
    }

    fn bind_insert<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.name.as_str())
            .bind(self.phone.as_deref())
            .bind(self.gender.map(|g| g.as_str()))
            .bind(self.birth_date.map(|d| d.to_string()))
            .bind(self.memo.as_deref())
            .bind(self.status.as_str())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.name.as_str())
            .bind(self.phone.as_deref())
            .bind(self.gender.map(|g| g.as_str()))
            .bind(self.birth_date.map(|d| d.to_string()))
            .bind(self.memo.as_deref())
            .bind(self.status.as_str())
            .bind(self.updated_at.timestamp())
    }
}

impl MemberRepository {
    /// Phone lookup within the active business.
    pub async fn find_by_phone(&self, phone: &str) -> DbErrorResult<Option<Member>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM members WHERE phone = ? AND business_id = ?",
            Member::COLUMNS.join(", ")
        );

        let row = sqlx::query(&sql)
            .bind(phone)
            .bind(business.get())
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(Member::from_row).transpose()
    }
}
