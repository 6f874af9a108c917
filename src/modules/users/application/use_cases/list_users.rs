use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize_user_listing, Principal};
use crate::shared::api::{Page, PageParams};
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum ListUsersError {
    AccessDenied,
    QueryError(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::AccessDenied => write!(f, "Superuser privileges required"),
            ListUsersError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        page: PageParams,
    ) -> Result<Page<User>, ListUsersError>;
}

pub struct ListUsersUseCase {
    query: Arc<dyn UserQuery>,
}

impl ListUsersUseCase {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IListUsersUseCase for ListUsersUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        page: PageParams,
    ) -> Result<Page<User>, ListUsersError> {
        authorize_user_listing(principal).map_err(|_| ListUsersError::AccessDenied)?;

        let (users, total) = self
            .query
            .list(page.skip(), page.limit())
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(Page::new(users, total, page))
    }
}
