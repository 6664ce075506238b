use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Empty token {location}")]
    EmptyToken { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature verification failed {location}")]
    BadSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity store failure: {message} {location}")]
    IdentityStore {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
