use gm_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("{entity} {id} not found {location}")]
    EntityNotFound {
        entity: &'static str,
        id: i64,
        location: ErrorLocation,
    },

    #[error("Business context not set {location}")]
    TenantContextNotSet { location: ErrorLocation },

    #[error("Row mapping failed: {message} {location}")]
    Mapping {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::TenantContextNotSet { .. } => Self::TenantContextNotSet { location },
            other => Self::Mapping {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
