use actix_web::{get, web, Responder};
use tracing::error;

use super::list_dto::ItemDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::FetchItemsError;
use crate::shared::api::{ApiResponse, Page, PageParams, PageQuery};
use crate::AppState;

/// List the items of one list, in display order
#[utoipa::path(
    get,
    path = "/api/v1/lists/{list_id}/items",
    tag = "items",
    security(("bearer_auth" = [])),
    params(
        ("list_id" = i32, Path, description = "List ID"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Page of items", body = inline(SuccessResponse<Page<ItemDto>>)),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to view this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/lists/{list_id}/items")]
pub async fn list_items_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();

    let page = match PageParams::try_from(query.into_inner()) {
        Ok(p) => p,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .fetch_items_use_case
        .execute(&principal, list_id, page)
        .await
    {
        Ok(page) => ApiResponse::success(page.map(ItemDto::from)),

        Err(FetchItemsError::ListNotFound) => {
            ApiResponse::not_found("LIST_NOT_FOUND", "List not found")
        }

        Err(FetchItemsError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this list")
        }

        Err(FetchItemsError::QueryError(ref e)) => {
            error!(error = %e, list_id, "Failed to list items");
            ApiResponse::internal_error()
        }
    }
}
