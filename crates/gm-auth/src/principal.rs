use crate::StoredIdentity;

use gm_core::{BusinessId, UserType};

/// Coarse permission set derived from the user type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    View,
    Edit,
    Admin,
}

/// The resolved identity of one request.
///
/// Built once per request by the authentication middleware and carried in
/// request extensions; never persisted, gone when the request ends.
/// `business_id` stays `None` until tenant resolution binds a business.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub user_type: UserType,
    pub business_id: Option<BusinessId>,
}

impl Principal {
    pub fn from_identity(identity: &StoredIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            username: identity.username.clone(),
            display_name: identity.display_name.clone(),
            user_type: identity.user_type,
            business_id: identity.business_id,
        }
    }

    pub fn permissions(&self) -> &'static [Permission] {
        match self.user_type {
            UserType::Owner => &[Permission::View, Permission::Edit, Permission::Admin],
            UserType::Employee => &[Permission::View, Permission::Edit],
            UserType::Member => &[Permission::View],
        }
    }

    pub fn has_permission(&self, required: Permission) -> bool {
        self.permissions().contains(&required)
    }

    pub fn satisfies_role(&self, required: UserType) -> bool {
        self.user_type.satisfies(required)
    }
}
