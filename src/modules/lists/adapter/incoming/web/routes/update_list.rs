use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::list_dto::ListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::{UpdateListError, UpdateListRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateListDto {
    #[schema(example = "Groceries")]
    pub title: Option<String>,

    /// New description; an empty string clears it
    pub description: Option<String>,

    pub is_archived: Option<bool>,
}

/// Update a list (partial)
#[utoipa::path(
    put,
    path = "/api/v1/lists/{list_id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    request_body = UpdateListDto,
    responses(
        (status = 200, description = "List updated", body = inline(SuccessResponse<ListDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to update this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[put("/api/v1/lists/{list_id}")]
pub async fn update_list_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateListDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();
    let dto = req.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let request = UpdateListRequest {
        title: dto.title,
        description: dto.description,
        is_archived: dto.is_archived,
    };

    match data
        .update_list_use_case
        .execute(&principal, list_id, request)
        .await
    {
        Ok(list) => ApiResponse::success(ListDto::from(list)),

        Err(UpdateListError::NotFound) => ApiResponse::not_found("LIST_NOT_FOUND", "List not found"),

        Err(UpdateListError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to update this list")
        }

        Err(UpdateListError::EmptyTitle) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Title must not be empty")
        }

        Err(UpdateListError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, "Failed to update list");
            ApiResponse::internal_error()
        }
    }
}
