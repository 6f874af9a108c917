use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::DeleteListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a list together with all of its items
#[utoipa::path(
    delete,
    path = "/api/v1/lists/{list_id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 204, description = "List deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to delete this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/lists/{list_id}")]
pub async fn delete_list_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.delete_list_use_case.execute(&principal, list_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteListError::NotFound) => ApiResponse::not_found("LIST_NOT_FOUND", "List not found"),

        Err(DeleteListError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to delete this list")
        }

        Err(DeleteListError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, "Failed to delete list");
            ApiResponse::internal_error()
        }
    }
}
