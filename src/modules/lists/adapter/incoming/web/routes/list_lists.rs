use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::list_dto::ListDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::FetchListsError;
use crate::shared::api::{ApiResponse, Page, PageParams};
use crate::AppState;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct ListListsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// Include archived lists; they are hidden by default.
    #[serde(default)]
    pub include_archived: bool,
}

/// List the caller's own lists
#[utoipa::path(
    get,
    path = "/api/v1/lists",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(ListListsQuery),
    responses(
        (status = 200, description = "Page of lists", body = inline(SuccessResponse<Page<ListDto>>)),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/v1/lists")]
pub async fn list_lists_handler(
    auth: AuthenticatedUser,
    query: web::Query<ListListsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = match PageParams::new(query.skip, query.limit) {
        Ok(p) => p,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data
        .fetch_lists_use_case
        .execute(&principal, page, query.include_archived)
        .await
    {
        Ok(page) => ApiResponse::success(page.map(ListDto::from)),
        Err(FetchListsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list lists");
            ApiResponse::internal_error()
        }
    }
}
