use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use uuid::Uuid;

/// Issues, verifies and refreshes HS256-signed tokens.
///
/// Tokens are immutable once issued and carry no mutable state, so the
/// service is freely shareable across requests. There is no revocation
/// store: a refreshed token leaves the original valid until it expires.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: &[u8], access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // A token is valid iff now < exp, exactly; no clock-skew allowance.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    /// Sign a token for `subject` expiring `ttl_secs` from now.
    #[track_caller]
    pub fn issue(&self, subject: &str, ttl_secs: u64) -> AuthErrorResult<String> {
        let caller = Location::caller();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl_secs as i64,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::Signing {
            source: e,
            location: ErrorLocation::from(caller),
        })
    }

    /// Short-lived token presented on every protected call
    #[track_caller]
    pub fn issue_access(&self, subject: &str) -> AuthErrorResult<String> {
        self.issue(subject, self.access_ttl_secs)
    }

    /// Long-lived token exchanged for fresh access tokens
    #[track_caller]
    pub fn issue_refresh(&self, subject: &str) -> AuthErrorResult<String> {
        self.issue(subject, self.refresh_ttl_secs)
    }

    /// Verify signature and expiry, returning the claims.
    ///
    /// Failure kinds are a closed set; callers branch on the result rather
    /// than letting verification failures unwind through layers.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let caller = Location::caller();
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken {
                location: ErrorLocation::from(caller),
            });
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(caller),
                    },
                    ErrorKind::InvalidSignature => AuthError::BadSignature {
                        location: ErrorLocation::from(caller),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(caller),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Exchange a valid token for a brand-new access token with the same
    /// subject. The presented token is left untouched.
    #[track_caller]
    pub fn refresh(&self, token: &str) -> AuthErrorResult<String> {
        let claims = self.verify(token)?;
        self.issue_access(&claims.sub)
    }

    pub fn access_ttl_secs(&self) -> u64 {
        self.access_ttl_secs
    }

    pub fn refresh_ttl_secs(&self) -> u64 {
        self.refresh_ttl_secs
    }
}
