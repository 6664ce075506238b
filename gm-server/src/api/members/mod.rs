pub mod create_member_request;
pub mod member_dto;
pub mod member_list_response;
pub mod member_response;
pub mod members;
pub mod update_member_request;
