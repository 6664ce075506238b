pub use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Business context not set for current request {location}")]
    TenantContextNotSet { location: ErrorLocation },

    #[error("{entity} {id} not found {location}")]
    EntityNotFound {
        entity: &'static str,
        id: i64,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid business id: {value} {location}")]
    InvalidBusinessId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user type: {value} {location}")]
    InvalidUserType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid business status: {value} {location}")]
    InvalidBusinessStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid member status: {value} {location}")]
    InvalidMemberStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid product type: {value} {location}")]
    InvalidProductType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid locker status: {value} {location}")]
    InvalidLockerStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
