pub mod business;
pub mod business_status;
pub mod gender;
pub mod locker;
pub mod locker_status;
pub mod member;
pub mod member_status;
pub mod product;
pub mod product_type;
pub mod user;
pub mod user_status;
pub mod user_type;
