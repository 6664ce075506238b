pub mod create_product_request;
pub mod product_dto;
pub mod product_list_response;
pub mod product_response;
pub mod products;
pub mod update_product_request;
