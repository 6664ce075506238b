use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Hash a plaintext password with bcrypt at the default cost.
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let caller = Location::caller();
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(caller),
    })
}

/// Check a plaintext password against a stored bcrypt hash.
#[track_caller]
pub fn verify_password(plain: &str, hash: &str) -> AuthErrorResult<bool> {
    let caller = Location::caller();
    bcrypt::verify(plain, hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(caller),
    })
}
