use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Signed token payload.
///
/// The subject is the username; role and business membership are loaded from
/// the identity store per request, so a stale token cannot carry a stale
/// role. `jti` makes every issued token string unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Token id
    pub jti: String,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
