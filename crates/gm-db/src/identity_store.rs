use crate::Result as DbErrorResult;

use gm_auth::{AuthError, IdentityStore, StoredIdentity};
use gm_core::{BusinessId, ErrorLocation, User, UserStatus, UserType};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use log::debug;
use sqlx::{Row, SqlitePool};

/// Identity store over the `users` table.
///
/// Consumed by the authentication layer through `Arc<dyn IdentityStore>`;
/// the trait surface deliberately exposes lookup only.
pub struct SqliteIdentityStore {
    pool: SqlitePool,
}

impl SqliteIdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an identity row. Used by seeding and tests; there is no
    /// self-service signup surface.
    pub async fn create_user(&self, user: &User) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    username, password_hash, display_name, user_type, status,
                    business_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.display_name.as_deref())
        .bind(user.user_type.as_str())
        .bind(user.status.as_str())
        .bind(user.business_id.map(|b| b.get()))
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn fetch_by_username(&self, username: &str) -> DbErrorResult<Option<StoredIdentity>> {
        let row = sqlx::query(
            r#"
                SELECT user_id, username, password_hash, display_name,
                       user_type, status, business_id
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user_type: String = row.try_get("user_type")?;
        let status: String = row.try_get("status")?;
        let business_id: Option<i64> = row.try_get("business_id")?;

        Ok(Some(StoredIdentity {
            user_id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            display_name: row.try_get("display_name")?,
            user_type: UserType::from_str(&user_type)?,
            status: UserStatus::from_str(&status)?,
            business_id: business_id.map(BusinessId::new).transpose()?,
        }))
    }
}

#[async_trait]
impl IdentityStore for SqliteIdentityStore {
    async fn find_by_subject(&self, subject: &str) -> Result<Option<StoredIdentity>, AuthError> {
        let caller = Location::caller();
        debug!("Loading identity for subject");

        self.fetch_by_username(subject)
            .await
            .map_err(|e| AuthError::IdentityStore {
                message: e.to_string(),
                location: ErrorLocation::from(caller),
            })
    }
}
