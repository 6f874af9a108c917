use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::Principal;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserResponse};
use crate::auth::application::use_cases::ILoginUserUseCase;
use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::use_cases::{
    ArchiveListError, CreateItemError, CreateItemRequest, CreateListError, CreateListRequest,
    DeleteItemError, DeleteListError, FetchItemsError, FetchListError, FetchListsError,
    IArchiveListUseCase, ICreateItemUseCase, ICreateListUseCase, IDeleteItemUseCase,
    IDeleteListUseCase, IFetchItemsUseCase, IFetchListUseCase, IFetchListsUseCase,
    IToggleItemUseCase, IUpdateItemUseCase, IUpdateListUseCase, ListWithItems, ToggleItemError,
    UpdateItemError, UpdateItemRequest, UpdateListError, UpdateListRequest,
};
use crate::shared::api::{Page, PageParams};
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::users::application::use_cases::{
    CreateUserError, DeleteUserError, FetchUserError, ICreateUserUseCase, IDeleteUserUseCase,
    IFetchUserUseCase, IListUsersUseCase, ISetUserActiveUseCase, IUpdateUserUseCase,
    ListUsersError, SetUserActiveError, UpdateUserError, UpdateUserRequest,
};

const TEST_JWT_SECRET: &str = "FAKE_JWT_SECRET_32_BYTES_FOR_TESTS_";

/// Token provider app data plus a ready-to-insert Authorization header
/// for the given identity.
pub fn auth_header_for(
    user_id: i32,
    is_superuser: bool,
) -> (
    web::Data<Arc<dyn TokenProvider + Send + Sync>>,
    (&'static str, String),
) {
    let service = JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 1800,
    });

    let token = service
        .generate_access_token(user_id, is_superuser)
        .unwrap();

    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(service);
    (
        web::Data::new(provider),
        ("Authorization", format!("Bearer {}", token)),
    )
}

/// Holds at most one user; `find_by_id` matches on id. Enough for
/// principal resolution in route tests.
#[derive(Default, Clone)]
pub struct StubUserQuery {
    user: Option<User>,
}

impl StubUserQuery {
    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone().filter(|u| u.id == user_id))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn list(&self, _skip: u64, _limit: u64) -> Result<(Vec<User>, u64), UserQueryError> {
        Ok((vec![], 0))
    }
}

/// Configurable fetch-user double: either returns a fixed user or
/// denies access.
#[derive(Default, Clone)]
pub struct StubFetchUser {
    user: Option<User>,
}

impl StubFetchUser {
    pub fn returning(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn denying() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IFetchUserUseCase for StubFetchUser {
    async fn execute(&self, _principal: &Principal, _user_id: i32) -> Result<User, FetchUserError> {
        self.user.clone().ok_or(FetchUserError::AccessDenied)
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(
        &self,
        _email: String,
        _full_name: String,
        _password: String,
    ) -> Result<User, CreateUserError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl IFetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, _principal: &Principal, _user_id: i32) -> Result<User, FetchUserError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _page: PageParams,
    ) -> Result<Page<User>, ListUsersError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _user_id: i32,
        _request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _principal: &Principal, _user_id: i32) -> Result<(), DeleteUserError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetUserActiveUseCase;

#[async_trait]
impl ISetUserActiveUseCase for StubSetUserActiveUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _user_id: i32,
        _is_active: bool,
    ) -> Result<User, SetUserActiveError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateListUseCase;

#[async_trait]
impl ICreateListUseCase for StubCreateListUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _request: CreateListRequest,
    ) -> Result<TodoList, CreateListError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchListsUseCase;

#[async_trait]
impl IFetchListsUseCase for StubFetchListsUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _page: PageParams,
        _include_archived: bool,
    ) -> Result<Page<TodoList>, FetchListsError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchListUseCase;

#[async_trait]
impl IFetchListUseCase for StubFetchListUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
    ) -> Result<ListWithItems, FetchListError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateListUseCase;

#[async_trait]
impl IUpdateListUseCase for StubUpdateListUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _request: UpdateListRequest,
    ) -> Result<TodoList, UpdateListError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubArchiveListUseCase;

#[async_trait]
impl IArchiveListUseCase for StubArchiveListUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _archived: bool,
    ) -> Result<TodoList, ArchiveListError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteListUseCase;

#[async_trait]
impl IDeleteListUseCase for StubDeleteListUseCase {
    async fn execute(&self, _principal: &Principal, _list_id: i32) -> Result<(), DeleteListError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateItemUseCase;

#[async_trait]
impl ICreateItemUseCase for StubCreateItemUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _request: CreateItemRequest,
    ) -> Result<TodoItem, CreateItemError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchItemsUseCase;

#[async_trait]
impl IFetchItemsUseCase for StubFetchItemsUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _page: PageParams,
    ) -> Result<Page<TodoItem>, FetchItemsError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateItemUseCase;

#[async_trait]
impl IUpdateItemUseCase for StubUpdateItemUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _item_id: i32,
        _request: UpdateItemRequest,
    ) -> Result<TodoItem, UpdateItemError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleItemUseCase;

#[async_trait]
impl IToggleItemUseCase for StubToggleItemUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _item_id: i32,
    ) -> Result<TodoItem, ToggleItemError> {
        unimplemented!("not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteItemUseCase;

#[async_trait]
impl IDeleteItemUseCase for StubDeleteItemUseCase {
    async fn execute(
        &self,
        _principal: &Principal,
        _list_id: i32,
        _item_id: i32,
    ) -> Result<(), DeleteItemError> {
        unimplemented!("not used in this test")
    }
}
