use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::Principal;
use crate::lists::application::domain::TodoList;
use crate::lists::application::ports::outgoing::ListQuery;
use crate::shared::api::{Page, PageParams};

#[derive(Debug, Clone)]
pub enum FetchListsError {
    QueryError(String),
}

impl std::fmt::Display for FetchListsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchListsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchListsError {}

#[async_trait]
pub trait IFetchListsUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        page: PageParams,
        include_archived: bool,
    ) -> Result<Page<TodoList>, FetchListsError>;
}

/// Lists are always scoped to the caller; there is no cross-user listing,
/// superuser or not.
pub struct FetchListsUseCase {
    query: Arc<dyn ListQuery>,
}

impl FetchListsUseCase {
    pub fn new(query: Arc<dyn ListQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchListsUseCase for FetchListsUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        page: PageParams,
        include_archived: bool,
    ) -> Result<Page<TodoList>, FetchListsError> {
        let (lists, total) = self
            .query
            .list_for_owner(principal.user_id, page.skip(), page.limit(), include_archived)
            .await
            .map_err(|e| FetchListsError::QueryError(e.to_string()))?;

        Ok(Page::new(lists, total, page))
    }
}
