pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, logout, me, refresh},
        login_request::LoginRequest,
        login_response::LoginResponse,
        user_info_response::UserInfoResponse,
    },
    businesses::{
        business_dto::BusinessDto,
        business_list_response::BusinessListResponse,
        business_response::BusinessResponse,
        businesses::{create_business, get_business, list_businesses},
        create_business_request::CreateBusinessRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    lockers::{
        create_locker_request::CreateLockerRequest,
        locker_dto::LockerDto,
        locker_list_response::LockerListResponse,
        locker_response::LockerResponse,
        lockers::{create_locker, delete_locker, get_locker, list_lockers, update_locker},
        update_locker_request::UpdateLockerRequest,
    },
    members::{
        create_member_request::CreateMemberRequest,
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        member_response::MemberResponse,
        members::{create_member, delete_member, get_member, list_members, update_member},
        update_member_request::UpdateMemberRequest,
    },
    page_query::PageQuery,
    products::{
        create_product_request::CreateProductRequest,
        product_dto::ProductDto,
        product_list_response::ProductListResponse,
        product_response::ProductResponse,
        products::{create_product, delete_product, get_product, list_products, update_product},
        update_product_request::UpdateProductRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
