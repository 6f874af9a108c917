use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::DeleteItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/v1/lists/{list_id}/items/{item_id}",
    tag = "items",
    security(("bearer_auth" = [])),
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("item_id" = i32, Path, description = "Item ID"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to delete this item", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
#[delete("/api/v1/lists/{list_id}/items/{item_id}")]
pub async fn delete_item_handler(
    auth: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list_id, item_id) = path.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .delete_item_use_case
        .execute(&principal, list_id, item_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteItemError::NotFound) => ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found"),

        Err(DeleteItemError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to delete this item")
        }

        Err(DeleteItemError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, item_id, "Failed to delete item");
            ApiResponse::internal_error()
        }
    }
}
