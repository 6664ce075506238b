pub mod error;
pub mod models;
pub mod tenant;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::business::Business;
pub use models::business_status::BusinessStatus;
pub use models::gender::Gender;
pub use models::locker::Locker;
pub use models::locker_status::LockerStatus;
pub use models::member::Member;
pub use models::member_status::MemberStatus;
pub use models::product::Product;
pub use models::product_type::ProductType;
pub use models::user::User;
pub use models::user_status::UserStatus;
pub use models::user_type::UserType;
pub use tenant::business_id::BusinessId;
pub use tenant::context::{CurrentBusiness, TenantContext};
