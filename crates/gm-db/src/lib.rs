pub mod business_repository;
pub mod connection;
pub mod entities;
pub mod entity;
pub mod error;
pub mod identity_store;
pub mod repository;
pub mod service;

pub use business_repository::BusinessRepository;
pub use entities::locker::{LockerRepository, LockerService};
pub use entities::member::{MemberRepository, MemberService};
pub use entities::product::{ProductRepository, ProductService};
pub use entity::TenantEntity;
pub use error::{DbError, Result};
pub use identity_store::SqliteIdentityStore;
pub use repository::{PageRequest, PageResult, TenantScopedRepository};
pub use service::TenantScopedService;

/// Embedded migrations; run against every pool before first use.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
