//! Contract a domain entity implements to ride the generic tenant-scoped
//! persistence. Everything tenant-related (filtering, stamping, not-found
//! semantics) lives once in the generic repository/service; an entity only
//! supplies its table shape and value bindings.

use crate::{DbError, Result as DbErrorResult};

use gm_core::{BusinessId, ErrorLocation};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

pub trait TenantEntity: Send + Sync + Sized {
    /// Singular name used in error messages ("member 7 not found")
    const ENTITY: &'static str;
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Full select list. Invariant: id column first, business_id second.
    const COLUMNS: &'static [&'static str];
    /// Columns written on update, in bind order. Excludes the id,
    /// business_id and created_at: none of those change after insert.
    const UPDATE_COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    fn business_id(&self) -> Option<BusinessId>;
    fn set_business_id(&mut self, business_id: BusinessId);

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self>;

    /// Bind values for `COLUMNS[2..]` in column order. The repository binds
    /// business_id itself, from the active tenant, never from the entity's
    /// pre-stamp value.
    fn bind_insert<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;

    /// Bind values for `UPDATE_COLUMNS` in column order.
    fn bind_update<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

/// Decode a Unix-seconds column.
#[track_caller]
pub(crate) fn datetime_from_unix(column: &str, seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Mapping {
        message: format!("Invalid timestamp in {}: {}", column, seconds),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Decode an ISO-8601 date column.
#[track_caller]
pub(crate) fn date_from_str(column: &str, value: &str) -> DbErrorResult<NaiveDate> {
    value.parse().map_err(|_| DbError::Mapping {
        message: format!("Invalid date in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}
