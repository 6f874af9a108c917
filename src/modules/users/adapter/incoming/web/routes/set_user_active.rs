use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use super::user_dto::UserDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::SetUserActiveError;
use crate::AppState;

async fn set_active(
    auth: AuthenticatedUser,
    user_id: i32,
    is_active: bool,
    data: web::Data<AppState>,
) -> HttpResponse {
    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .set_user_active_use_case
        .execute(&principal, user_id, is_active)
        .await
    {
        Ok(user) => ApiResponse::success(UserDto::from(user)),

        Err(SetUserActiveError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(SetUserActiveError::SuperuserRequired) => ApiResponse::forbidden(
            "SUPERUSER_REQUIRED",
            "Only a superuser may make this status change",
        ),

        Err(SetUserActiveError::RepositoryError(ref e)) => {
            error!(error = %e, user_id, "Failed to change account status");
            ApiResponse::internal_error()
        }
    }
}

/// Reactivate a user account (superuser only, idempotent)
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/activate",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account activated", body = inline(SuccessResponse<UserDto>)),
        (status = 403, description = "Superuser privileges required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/{user_id}/activate")]
pub async fn activate_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_active(auth, path.into_inner(), true, data).await
}

/// Deactivate a user account (self or superuser, idempotent)
///
/// The user's existing tokens stop working on their next request; account
/// state is checked per request, not at token expiry.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/deactivate",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account deactivated", body = inline(SuccessResponse<UserDto>)),
        (status = 403, description = "Not allowed to deactivate this account", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/users/{user_id}/deactivate")]
pub async fn deactivate_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_active(auth, path.into_inner(), false, data).await
}
