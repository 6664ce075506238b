//! Generic tenant-scoped repository.
//!
//! Every query is confined to the business bound in [`TenantContext`]; there
//! is no way for a caller to read or write another tenant's rows through
//! this type. A row belonging to a different business is indistinguishable
//! from a row that does not exist.

use crate::entity::TenantEntity;
use crate::{DbError, Result as DbErrorResult};

use gm_core::{ErrorLocation, TenantContext};

use std::marker::PhantomData;
use std::panic::Location;

use log::debug;
use sqlx::SqlitePool;

/// Zero-based page request for list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

#[derive(Debug, Clone)]
pub struct PageResult<E> {
    pub items: Vec<E>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

pub struct TenantScopedRepository<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for TenantScopedRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: TenantEntity> TenantScopedRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn select_list() -> String {
        E::COLUMNS.join(", ")
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<E>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE business_id = ? ORDER BY {}",
            Self::select_list(),
            E::TABLE,
            E::ID_COLUMN
        );

        let rows = sqlx::query(&sql)
            .bind(business.get())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(E::from_row).collect()
    }

    pub async fn find_page(&self, page: PageRequest) -> DbErrorResult<PageResult<E>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE business_id = ? ORDER BY {} LIMIT ? OFFSET ?",
            Self::select_list(),
            E::TABLE,
            E::ID_COLUMN
        );

        let rows = sqlx::query(&sql)
            .bind(business.get())
            .bind(i64::from(page.size))
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let items = rows.iter().map(E::from_row).collect::<DbErrorResult<_>>()?;
        let total = self.count().await?;

        Ok(PageResult {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<E>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? AND business_id = ?",
            Self::select_list(),
            E::TABLE,
            E::ID_COLUMN
        );

        let row = sqlx::query(&sql)
            .bind(id)
            .bind(business.get())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(E::from_row).transpose()
    }

    pub async fn exists_by_id(&self, id: i64) -> DbErrorResult<bool> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ? AND business_id = ?",
            E::TABLE,
            E::ID_COLUMN
        );

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .bind(business.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let business = TenantContext::current()?;
        let sql = format!("SELECT COUNT(*) FROM {} WHERE business_id = ?", E::TABLE);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(business.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Insert `entity` under the active business, assigning the generated
    /// id. The entity's own business_id is overwritten before binding.
    pub async fn insert(&self, entity: &mut E) -> DbErrorResult<i64> {
        let business = TenantContext::current()?;
        entity.set_business_id(business);

        let placeholders = vec!["?"; E::COLUMNS.len() - 1].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS[1..].join(", "),
            placeholders
        );

        let query = sqlx::query(&sql).bind(business.get());
        let result = entity.bind_insert(query).execute(&self.pool).await?;

        let id = result.last_insert_rowid();
        entity.set_id(id);

        debug!("Inserted {} {} for business {}", E::ENTITY, id, business);
        Ok(id)
    }

    /// Tenant-filtered update; reports not-found when the row is absent
    /// under the active business.
    pub async fn update(&self, id: i64, entity: &E) -> DbErrorResult<()> {
        let caller = Location::caller();
        let business = TenantContext::current()?;

        let set_clause = E::UPDATE_COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ? AND business_id = ?",
            E::TABLE,
            set_clause,
            E::ID_COLUMN
        );

        let query = entity
            .bind_update(sqlx::query(&sql))
            .bind(id)
            .bind(business.get());
        let result = query.execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::EntityNotFound {
                entity: E::ENTITY,
                id,
                location: ErrorLocation::from(caller),
            });
        }

        Ok(())
    }

    /// Tenant-filtered delete; reports not-found when the row is absent
    /// under the active business.
    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        let caller = Location::caller();
        let business = TenantContext::current()?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND business_id = ?",
            E::TABLE,
            E::ID_COLUMN
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(business.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::EntityNotFound {
                entity: E::ENTITY,
                id,
                location: ErrorLocation::from(caller),
            });
        }

        debug!("Deleted {} {} for business {}", E::ENTITY, id, business);
        Ok(())
    }
}
