use crate::{BusinessId, CoreError, Result as CoreErrorResult};

use std::cell::RefCell;
use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// The business bound to the request currently being handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentBusiness {
    pub id: BusinessId,
    pub name: Option<String>,
}

tokio::task_local! {
    static CURRENT_BUSINESS: RefCell<Option<CurrentBusiness>>;
}

/// Request-scoped holder of the active business (tenant).
///
/// A slot exists only inside [`TenantContext::scope`]; the tenant middleware
/// enters one scope per request. When the scope future completes or is
/// dropped the slot ceases to exist, so no exit path of a request can leak
/// its tenant into a later request. Pooled worker threads never share the
/// slot: it is task-local, not thread-local.
pub struct TenantContext;

impl TenantContext {
    /// Run `fut` with a fresh, empty tenant slot.
    ///
    /// Nesting scopes shadows the outer slot for the duration of the inner
    /// future; request handling never nests them.
    pub async fn scope<F>(fut: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_BUSINESS.scope(RefCell::new(None), fut).await
    }

    /// Bind `id` as the active business for the current scope.
    ///
    /// Fails with `TenantContextNotSet` when called outside a scope.
    #[track_caller]
    pub fn set(id: BusinessId) -> CoreErrorResult<()> {
        let caller = Location::caller();
        CURRENT_BUSINESS
            .try_with(|slot| {
                debug!("Binding business {} to current request", id);
                *slot.borrow_mut() = Some(CurrentBusiness { id, name: None });
            })
            .map_err(|_| CoreError::TenantContextNotSet {
                location: ErrorLocation::from(caller),
            })
    }

    /// Attach the business display name to the bound business.
    #[track_caller]
    pub fn set_name(name: impl Into<String>) -> CoreErrorResult<()> {
        let caller = Location::caller();
        CURRENT_BUSINESS
            .try_with(|slot| match slot.borrow_mut().as_mut() {
                Some(current) => {
                    current.name = Some(name.into());
                    Ok(())
                }
                None => Err(CoreError::TenantContextNotSet {
                    location: ErrorLocation::from(caller),
                }),
            })
            .map_err(|_| CoreError::TenantContextNotSet {
                location: ErrorLocation::from(caller),
            })?
    }

    /// The active business id. Code paths that require a tenant use this.
    #[track_caller]
    pub fn current() -> CoreErrorResult<BusinessId> {
        let caller = Location::caller();
        Self::current_or_none().ok_or(CoreError::TenantContextNotSet {
            location: ErrorLocation::from(caller),
        })
    }

    /// Non-failing variant for code that legitimately runs tenant-less
    /// (health checks, login).
    pub fn current_or_none() -> Option<BusinessId> {
        CURRENT_BUSINESS
            .try_with(|slot| slot.borrow().as_ref().map(|current| current.id))
            .ok()
            .flatten()
    }

    /// Display name of the bound business, when one was attached.
    pub fn name() -> Option<String> {
        CURRENT_BUSINESS
            .try_with(|slot| slot.borrow().as_ref().and_then(|c| c.name.clone()))
            .ok()
            .flatten()
    }

    pub fn is_set() -> bool {
        Self::current_or_none().is_some()
    }

    /// Unbind the active business. Idempotent; safe to call outside a scope.
    pub fn clear() {
        let _ = CURRENT_BUSINESS.try_with(|slot| {
            if let Some(current) = slot.borrow_mut().take() {
                debug!("Cleared business {} from current request", current.id);
            }
        });
    }
}
