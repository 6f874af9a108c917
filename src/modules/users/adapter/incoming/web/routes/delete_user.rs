use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::users::application::use_cases::DeleteUserError;
use crate::AppState;

/// Delete a user together with all of their lists and items
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to delete this user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/users/{user_id}")]
pub async fn delete_user_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.delete_user_use_case.execute(&principal, user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(DeleteUserError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to delete this user")
        }

        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(error = %e, user_id, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
