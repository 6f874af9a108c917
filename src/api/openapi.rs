use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse, LoginUserInfo};
use crate::lists::adapter::incoming::web::routes::create_item::CreateItemDto;
use crate::lists::adapter::incoming::web::routes::create_list::CreateListDto;
use crate::lists::adapter::incoming::web::routes::update_item::UpdateItemDto;
use crate::lists::adapter::incoming::web::routes::update_list::UpdateListDto;
use crate::lists::adapter::incoming::web::routes::{ItemDto, ListDto, ListWithItemsDto};
use crate::users::adapter::incoming::web::routes::register_user::RegisterUserDto;
use crate::users::adapter::incoming::web::routes::update_user::UpdateUserDto;
use crate::users::adapter::incoming::web::routes::UserDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "To-Do Backend API",
        version = "1.0.0",
        description = "Multi-user to-do list service with JWT authentication",
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // Users
        crate::users::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::users::adapter::incoming::web::routes::list_users::list_users_handler,
        crate::users::adapter::incoming::web::routes::get_user::get_current_user_handler,
        crate::users::adapter::incoming::web::routes::get_user::get_user_handler,
        crate::users::adapter::incoming::web::routes::update_user::update_user_handler,
        crate::users::adapter::incoming::web::routes::delete_user::delete_user_handler,
        crate::users::adapter::incoming::web::routes::set_user_active::activate_user_handler,
        crate::users::adapter::incoming::web::routes::set_user_active::deactivate_user_handler,

        // Lists
        crate::lists::adapter::incoming::web::routes::create_list::create_list_handler,
        crate::lists::adapter::incoming::web::routes::list_lists::list_lists_handler,
        crate::lists::adapter::incoming::web::routes::get_list::get_list_handler,
        crate::lists::adapter::incoming::web::routes::update_list::update_list_handler,
        crate::lists::adapter::incoming::web::routes::delete_list::delete_list_handler,
        crate::lists::adapter::incoming::web::routes::archive_list::archive_list_handler,
        crate::lists::adapter::incoming::web::routes::archive_list::unarchive_list_handler,

        // Items
        crate::lists::adapter::incoming::web::routes::create_item::create_item_handler,
        crate::lists::adapter::incoming::web::routes::list_items::list_items_handler,
        crate::lists::adapter::incoming::web::routes::update_item::update_item_handler,
        crate::lists::adapter::incoming::web::routes::toggle_item::toggle_item_handler,
        crate::lists::adapter::incoming::web::routes::delete_item::delete_item_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            SuccessResponse<UserDto>,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,

            // User DTOs
            RegisterUserDto,
            UpdateUserDto,
            UserDto,

            // List and item DTOs
            CreateListDto,
            UpdateListDto,
            ListDto,
            ListWithItemsDto,
            CreateItemDto,
            UpdateItemDto,
            ItemDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User account endpoints"),
        (name = "lists", description = "To-do list endpoints"),
        (name = "items", description = "List item endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your access token"))
                        .build(),
                ),
            )
        }
    }
}
