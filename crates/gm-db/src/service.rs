//! Generic tenant-scoped service, the layer handlers talk to.
//!
//! Adds the stamping and find-then-act semantics on top of the repository:
//! saves stamp the active business over whatever the caller supplied, and
//! updates/deletes treat a row of another business exactly like a missing
//! row.

use crate::entity::TenantEntity;
use crate::repository::{PageRequest, PageResult, TenantScopedRepository};
use crate::{DbError, Result as DbErrorResult};

use gm_core::{ErrorLocation, TenantContext};

use std::panic::Location;

use sqlx::SqlitePool;

pub struct TenantScopedService<E> {
    repository: TenantScopedRepository<E>,
}

impl<E> Clone for TenantScopedService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<E: TenantEntity> TenantScopedService<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: TenantScopedRepository::new(pool),
        }
    }

    pub fn repository(&self) -> &TenantScopedRepository<E> {
        &self.repository
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<E>> {
        self.repository.find_all().await
    }

    pub async fn find_page(&self, page: PageRequest) -> DbErrorResult<PageResult<E>> {
        self.repository.find_page(page).await
    }

    pub async fn find(&self, id: i64) -> DbErrorResult<Option<E>> {
        self.repository.find_by_id(id).await
    }

    /// Fetch by id or fail with `EntityNotFound`.
    pub async fn get(&self, id: i64) -> DbErrorResult<E> {
        let caller = Location::caller();
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DbError::EntityNotFound {
                entity: E::ENTITY,
                id,
                location: ErrorLocation::from(caller),
            })
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        self.repository.count().await
    }

    /// Persist a new entity under the active business.
    ///
    /// The business id is stamped from the tenant context immediately before
    /// the insert; any value the caller put on the entity is discarded.
    pub async fn save(&self, mut entity: E) -> DbErrorResult<E> {
        let business = TenantContext::current()?;
        entity.set_business_id(business);
        self.repository.insert(&mut entity).await?;
        Ok(entity)
    }

    /// Replace an existing row.
    ///
    /// The row is first fetched under the tenant filter; a miss (including a
    /// row that exists under another business) fails with `EntityNotFound`.
    /// The stored row's id and business id are copied onto the incoming
    /// entity before persisting, so an update can never move a row between
    /// businesses.
    pub async fn update(&self, id: i64, mut entity: E) -> DbErrorResult<E> {
        let existing = self.get(id).await?;

        entity.set_id(id);
        if let Some(business) = existing.business_id() {
            entity.set_business_id(business);
        }

        self.repository.update(id, &entity).await?;
        Ok(entity)
    }

    /// Delete an existing row, find-then-act like `update`.
    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        self.get(id).await?;
        self.repository.delete_by_id(id).await
    }
}
