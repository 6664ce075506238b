pub mod locker;
pub mod member;
pub mod product;
