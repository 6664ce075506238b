pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod user_info_response;
