use actix_web::{get, web, Responder};
use tracing::error;

use super::user_dto::UserDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::shared::api::{ApiResponse, Page, PageParams, PageQuery};
use crate::users::application::use_cases::ListUsersError;
use crate::AppState;

/// List all user accounts (superuser only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of users", body = inline(SuccessResponse<Page<UserDto>>)),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Superuser privileges required", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn list_users_handler(
    auth: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match PageParams::try_from(query.into_inner()) {
        Ok(p) => p,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.list_users_use_case.execute(&principal, page).await {
        Ok(page) => ApiResponse::success(page.map(UserDto::from)),
        Err(ListUsersError::AccessDenied) => {
            ApiResponse::forbidden("SUPERUSER_REQUIRED", "Superuser privileges required")
        }
        Err(ListUsersError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
