use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::list_dto::ListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::{CreateListError, CreateListRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateListDto {
    #[schema(example = "Groceries")]
    pub title: String,

    #[schema(example = "Weekly shop")]
    pub description: Option<String>,
}

/// Create a list owned by the caller
#[utoipa::path(
    post,
    path = "/api/v1/lists",
    tag = "lists",
    security(("bearer_auth" = [])),
    request_body = CreateListDto,
    responses(
        (status = 201, description = "List created", body = inline(SuccessResponse<ListDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/v1/lists")]
pub async fn create_list_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateListDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .create_list_use_case
        .execute(
            &principal,
            CreateListRequest {
                title: dto.title,
                description: dto.description,
            },
        )
        .await
    {
        Ok(list) => ApiResponse::created(ListDto::from(list)),

        Err(CreateListError::EmptyTitle) => {
            ApiResponse::unprocessable_entity("VALIDATION_ERROR", "Title must not be empty")
        }

        Err(CreateListError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to create list");
            ApiResponse::internal_error()
        }
    }
}
