use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. No default: the server refuses to start
    /// without one.
    pub jwt_secret: Option<String>,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_BYTES,
                secret.len()
            )));
        }

        if self.access_token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.access_token_ttl_secs must be > 0"));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs {
            return Err(ConfigError::auth(
                "auth.refresh_token_ttl_secs must exceed auth.access_token_ttl_secs",
            ));
        }

        Ok(())
    }
}
