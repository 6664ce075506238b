pub mod business_id;
pub mod context;
