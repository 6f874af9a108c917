use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use super::list_dto::ListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::ArchiveListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn set_archived(
    auth: AuthenticatedUser,
    list_id: i32,
    archived: bool,
    data: web::Data<AppState>,
) -> HttpResponse {
    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .archive_list_use_case
        .execute(&principal, list_id, archived)
        .await
    {
        Ok(list) => ApiResponse::success(ListDto::from(list)),

        Err(ArchiveListError::NotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }

        Err(ArchiveListError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to archive this list")
        }

        Err(ArchiveListError::RepositoryError(ref e)) => {
            error!(error = %e, list_id, "Failed to change archive state");
            ApiResponse::internal_error()
        }
    }
}

/// Archive a list (idempotent)
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/archive",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 200, description = "List archived", body = inline(SuccessResponse<ListDto>)),
        (status = 403, description = "Not allowed to archive this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/lists/{list_id}/archive")]
pub async fn archive_list_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_archived(auth, path.into_inner(), true, data).await
}

/// Restore an archived list (idempotent)
#[utoipa::path(
    post,
    path = "/api/v1/lists/{list_id}/unarchive",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 200, description = "List restored", body = inline(SuccessResponse<ListDto>)),
        (status = 403, description = "Not allowed to archive this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
#[post("/api/v1/lists/{list_id}/unarchive")]
pub async fn unarchive_list_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_archived(auth, path.into_inner(), false, data).await
}
