use actix_web::{get, web, Responder};
use tracing::error;

use super::list_dto::ListWithItemsDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{resolve_principal, AuthenticatedUser};
use crate::lists::application::use_cases::FetchListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one list together with its items
#[utoipa::path(
    get,
    path = "/api/v1/lists/{list_id}",
    tag = "lists",
    security(("bearer_auth" = [])),
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 200, description = "List with items", body = inline(SuccessResponse<ListWithItemsDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not allowed to view this list", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
#[get("/api/v1/lists/{list_id}")]
pub async fn get_list_handler(
    auth: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let list_id = path.into_inner();

    let principal = match resolve_principal(&data, &auth).await {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.fetch_list_use_case.execute(&principal, list_id).await {
        Ok(result) => ApiResponse::success(ListWithItemsDto::from(result)),

        Err(FetchListError::NotFound) => ApiResponse::not_found("LIST_NOT_FOUND", "List not found"),

        Err(FetchListError::AccessDenied) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this list")
        }

        Err(FetchListError::QueryError(ref e)) => {
            error!(error = %e, list_id, "Failed to fetch list");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::Principal;
    use crate::lists::application::domain::{TodoItem, TodoList};
    use crate::lists::application::use_cases::{IFetchListUseCase, ListWithItems};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{auth_header_for, StubUserQuery};
    use crate::users::application::domain::User;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    fn active_user(id: i32) -> User {
        User {
            id,
            email: format!("user{}@example.com", id),
            full_name: format!("User {}", id),
            hashed_password: "hash".to_string(),
            is_active: true,
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        }
    }

    struct MockFetchList {
        owner_id: i32,
    }

    #[async_trait]
    impl IFetchListUseCase for MockFetchList {
        async fn execute(
            &self,
            principal: &Principal,
            list_id: i32,
        ) -> Result<ListWithItems, FetchListError> {
            if list_id != 1 {
                return Err(FetchListError::NotFound);
            }
            if !principal.is_superuser && principal.user_id != self.owner_id {
                return Err(FetchListError::AccessDenied);
            }
            Ok(ListWithItems {
                list: TodoList {
                    id: 1,
                    owner_id: self.owner_id,
                    title: "Groceries".to_string(),
                    description: None,
                    is_archived: false,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
                items: vec![TodoItem {
                    id: 10,
                    list_id: 1,
                    content: "Buy milk".to_string(),
                    is_completed: false,
                    order: 0,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }],
            })
        }
    }

    #[actix_web::test]
    async fn test_get_own_list_with_items() {
        let (token_data, header) = auth_header_for(7, false);
        let app_state = TestAppStateBuilder::default()
            .with_user_query(StubUserQuery::with_user(active_user(7)))
            .with_fetch_list(MockFetchList { owner_id: 7 })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data)
                .service(get_list_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/lists/1")
            .insert_header(header)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Groceries");
        assert_eq!(body["data"]["items"][0]["content"], "Buy milk");
    }

    #[actix_web::test]
    async fn test_foreign_list_forbidden() {
        let (token_data, header) = auth_header_for(7, false);
        let app_state = TestAppStateBuilder::default()
            .with_user_query(StubUserQuery::with_user(active_user(7)))
            .with_fetch_list(MockFetchList { owner_id: 8 })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data)
                .service(get_list_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/lists/1")
            .insert_header(header)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_missing_list_not_found() {
        let (token_data, header) = auth_header_for(7, false);
        let app_state = TestAppStateBuilder::default()
            .with_user_query(StubUserQuery::with_user(active_user(7)))
            .with_fetch_list(MockFetchList { owner_id: 7 })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_data)
                .service(get_list_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/lists/99")
            .insert_header(header)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "LIST_NOT_FOUND");
    }
}
