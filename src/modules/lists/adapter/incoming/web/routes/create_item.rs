use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::list_dto::ItemDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::{CreateItemError, CreateItemRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateItemDto {
    #[schema(example = "Buy milk")]
    pub content: String,

    /// Caller-defined sort position; defaults to 0
    #[serde(default)]
    pub order: i32,
}

/// Add an item to a list
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/items",
    tag = "items",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = inline(SuccessResponse<ItemDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to modify this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/lists/{list_id}/items")]
pub async fn create_item_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<CreateItemDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();
    let dto = req.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .create_item_use_case
        .execute(
            &principal,
            list_id,
            CreateItemRequest {
                content: dto.content,
                order: dto.order,
            },
        )
        .await
    {
        Ok(item) => ApiResponse::created(ItemDto::from(item)),

        Err(CreateItemError::ListNotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }

        Err(CreateItemError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to modify this list")
        }

        Err(CreateItemError::EmptyContent) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Content must not be empty")
        }

        Err(CreateItemError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, "Failed to create item");
            ApiResponse::internal_error()
        }
    }
}
