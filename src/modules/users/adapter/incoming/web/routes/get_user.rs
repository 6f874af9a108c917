use actix_web::{get, web, Responder};
use tracing::error;

use super::user_dto::UserDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::FetchUserError;
use crate::AppState;

/// Fetch the calling user's own profile
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = inline(SuccessResponse<UserDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Account inactive", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/me")]
pub async fn get_current_user_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .fetch_user_use_case
        .execute(&principal, principal.user_id)
        .await
    {
        Ok(user) => ApiResponse::success(UserDto::from(user)),
        Err(FetchUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this user")
        }
        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, "Failed to fetch current user");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch a user by id (self or superuser)
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to view this user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{user_id}")]
pub async fn get_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.fetch_user_use_case.execute(&principal, user_id).await {
        Ok(user) => ApiResponse::success(UserDto::from(user)),
        Err(FetchUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this user")
        }
        Err(FetchUserError::QueryError(ref e)) => {
            error!(error = %e, user_id, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
