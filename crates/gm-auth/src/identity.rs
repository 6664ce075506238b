use crate::Result as AuthErrorResult;

use gm_core::{BusinessId, UserStatus, UserType};

use async_trait::async_trait;

/// Identity row as the store returns it for a token subject.
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub user_type: UserType,
    pub status: UserStatus,
    pub business_id: Option<BusinessId>,
}

impl StoredIdentity {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Lookup of current role/membership/status for a token subject.
///
/// The authentication layer consumes this through `Arc<dyn IdentityStore>`;
/// the SQLite implementation lives in the persistence crate.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// `Ok(None)` for an unknown subject. Whether the subject once existed
    /// is not distinguishable from never having existed.
    async fn find_by_subject(&self, subject: &str) -> AuthErrorResult<Option<StoredIdentity>>;
}
