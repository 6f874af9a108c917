use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::ILoginUserUseCase;
use crate::lists::application::use_cases::{
    IArchiveListUseCase, ICreateItemUseCase, ICreateListUseCase, IDeleteItemUseCase,
    IDeleteListUseCase, IFetchItemsUseCase, IFetchListUseCase, IFetchListsUseCase,
    IToggleItemUseCase, IUpdateItemUseCase, IUpdateListUseCase,
};
use crate::tests::support::stubs::*;
use crate::users::application::ports::outgoing::UserQuery;
use crate::users::application::use_cases::{
    ICreateUserUseCase, IDeleteUserUseCase, IFetchUserUseCase, IListUsersUseCase,
    ISetUserActiveUseCase, IUpdateUserUseCase,
};
use crate::AppState;

/// Builds an [`AppState`] for route tests. Every slot starts with a stub
/// that panics when hit, so a test only wires the collaborators it
/// actually exercises.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    fetch_user: Arc<dyn IFetchUserUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    set_user_active: Arc<dyn ISetUserActiveUseCase + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    create_list: Arc<dyn ICreateListUseCase + Send + Sync>,
    fetch_lists: Arc<dyn IFetchListsUseCase + Send + Sync>,
    fetch_list: Arc<dyn IFetchListUseCase + Send + Sync>,
    update_list: Arc<dyn IUpdateListUseCase + Send + Sync>,
    archive_list: Arc<dyn IArchiveListUseCase + Send + Sync>,
    delete_list: Arc<dyn IDeleteListUseCase + Send + Sync>,
    create_item: Arc<dyn ICreateItemUseCase + Send + Sync>,
    fetch_items: Arc<dyn IFetchItemsUseCase + Send + Sync>,
    update_item: Arc<dyn IUpdateItemUseCase + Send + Sync>,
    toggle_item: Arc<dyn IToggleItemUseCase + Send + Sync>,
    delete_item: Arc<dyn IDeleteItemUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            create_user: Arc::new(StubCreateUserUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            set_user_active: Arc::new(StubSetUserActiveUseCase),
            user_query: Arc::new(StubUserQuery::default()),
            create_list: Arc::new(StubCreateListUseCase),
            fetch_lists: Arc::new(StubFetchListsUseCase),
            fetch_list: Arc::new(StubFetchListUseCase),
            update_list: Arc::new(StubUpdateListUseCase),
            archive_list: Arc::new(StubArchiveListUseCase),
            delete_list: Arc::new(StubDeleteListUseCase),
            create_item: Arc::new(StubCreateItemUseCase),
            fetch_items: Arc::new(StubFetchItemsUseCase),
            update_item: Arc::new(StubUpdateItemUseCase),
            toggle_item: Arc::new(StubToggleItemUseCase),
            delete_item: Arc::new(StubDeleteItemUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl IFetchUserUseCase + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl IUpdateUserUseCase + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_set_user_active(mut self, uc: impl ISetUserActiveUseCase + 'static) -> Self {
        self.set_user_active = Arc::new(uc);
        self
    }

    pub fn with_user_query(mut self, query: impl UserQuery + 'static) -> Self {
        self.user_query = Arc::new(query);
        self
    }

    pub fn with_create_list(mut self, uc: impl ICreateListUseCase + 'static) -> Self {
        self.create_list = Arc::new(uc);
        self
    }

    pub fn with_fetch_lists(mut self, uc: impl IFetchListsUseCase + 'static) -> Self {
        self.fetch_lists = Arc::new(uc);
        self
    }

    pub fn with_fetch_list(mut self, uc: impl IFetchListUseCase + 'static) -> Self {
        self.fetch_list = Arc::new(uc);
        self
    }

    pub fn with_update_list(mut self, uc: impl IUpdateListUseCase + 'static) -> Self {
        self.update_list = Arc::new(uc);
        self
    }

    pub fn with_archive_list(mut self, uc: impl IArchiveListUseCase + 'static) -> Self {
        self.archive_list = Arc::new(uc);
        self
    }

    pub fn with_delete_list(mut self, uc: impl IDeleteListUseCase + 'static) -> Self {
        self.delete_list = Arc::new(uc);
        self
    }

    pub fn with_create_item(mut self, uc: impl ICreateItemUseCase + 'static) -> Self {
        self.create_item = Arc::new(uc);
        self
    }

    pub fn with_fetch_items(mut self, uc: impl IFetchItemsUseCase + 'static) -> Self {
        self.fetch_items = Arc::new(uc);
        self
    }

    pub fn with_update_item(mut self, uc: impl IUpdateItemUseCase + 'static) -> Self {
        self.update_item = Arc::new(uc);
        self
    }

    pub fn with_toggle_item(mut self, uc: impl IToggleItemUseCase + 'static) -> Self {
        self.toggle_item = Arc::new(uc);
        self
    }

    pub fn with_delete_item(mut self, uc: impl IDeleteItemUseCase + 'static) -> Self {
        self.delete_item = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_user_use_case: self.login_user,
            create_user_use_case: self.create_user,
            fetch_user_use_case: self.fetch_user,
            list_users_use_case: self.list_users,
            update_user_use_case: self.update_user,
            delete_user_use_case: self.delete_user,
            set_user_active_use_case: self.set_user_active,
            user_query: self.user_query,
            create_list_use_case: self.create_list,
            fetch_lists_use_case: self.fetch_lists,
            fetch_list_use_case: self.fetch_list,
            update_list_use_case: self.update_list,
            archive_list_use_case: self.archive_list,
            delete_list_use_case: self.delete_list,
            create_item_use_case: self.create_item,
            fetch_items_use_case: self.fetch_items,
            update_item_use_case: self.update_item,
            toggle_item_use_case: self.toggle_item,
            delete_item_use_case: self.delete_item,
        })
    }
}
