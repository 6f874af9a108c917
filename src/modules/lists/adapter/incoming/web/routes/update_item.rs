use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::list_dto::ItemDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::{UpdateItemError, UpdateItemRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateItemDto {
    #[schema(example = "Buy oat milk")]
    pub content: Option<String>,

    pub is_completed: Option<bool>,

    pub order: Option<i32>,
}

/// Update an item (partial)
#[utoipa::path(
    put,
    path = "/api/v1/lists/{list_id}/items/{item_id}",
    tag = "items",
    security(("bearer_auth" = [])),
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("item_id" = i32, Path, description = "Item ID"),
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = inline(SuccessResponse<ItemDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to modify this item", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[put("/api/v1/lists/{list_id}/items/{item_id}")]
pub async fn update_item_handler(
    auth: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    req: web::Json<UpdateItemDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list_id, item_id) = path.into_inner();
    let dto = req.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let request = UpdateItemRequest {
        content: dto.content,
        is_completed: dto.is_completed,
        order: dto.order,
    };

    match data
        .update_item_use_case
        .execute(&principal, list_id, item_id, request)
        .await
    {
        Ok(item) => ApiResponse::success(ItemDto::from(item)),

        Err(UpdateItemError::NotFound) => ApiResponse::not_found("ITEM_NOT_FOUND", "Item not found"),

        Err(UpdateItemError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to modify this item")
        }

        Err(UpdateItemError::EmptyContent) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Content must not be empty")
        }

        Err(UpdateItemError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, item_id, "Failed to update item");
            ApiResponse::internal_error()
        }
    }
}
