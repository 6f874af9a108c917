use actix_web::{post, web, Responder};
use tracing::error;

use super::list_dto::ItemDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::ToggleItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Flip an item's completion state
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/items/{item_id}/toggle",
    tag = "items",
    security(("bearer_auth" = [])),
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("item_id" = i32, Path, description = "Item ID"),
    ),
    responses(
        (status = 200, description = "Item in its new state", body = inline(SuccessResponse<ItemDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to modify this item", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/lists/{list_id}/items/{item_id}/toggle")]
pub async fn toggle_item_handler(
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
        .toggle_item_use_case
        .execute(&principal, list_id, item_id)
        .await
    {
        Ok(item) => ApiResponse::success(ItemDto::from(item)),

        Err(ToggleItemError::NotFound) => ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found"),

        Err(ToggleItemError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to modify this item")
        }

        Err(ToggleItemError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, item_id, "Failed to toggle item");
            ApiResponse::internal_error()
        }
    }
}
