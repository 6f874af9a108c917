use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoItem;
use crate::lists::application::ports::outgoing::ListQuery;
use crate::shared::api::{Page, PageParams};

#[derive(Debug, Clone)]
pub enum FetchItemsError {
    ListNotFound,
    AccessDenied,
    QueryError(String),
}

impl std::fmt::Display for FetchItemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchItemsError::ListNotFound => write!(f, "List not found"),
            FetchItemsError::AccessDenied => write!(f, "Not allowed to view this list"),
            FetchItemsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchItemsError {}

#[async_trait]
pub trait IFetchItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        page: PageParams,
    ) -> Result<Page<TodoItem>, FetchItemsError>;
}

pub struct FetchItemsUseCase {
    query: Arc<dyn ListQuery>,
}

impl FetchItemsUseCase {
    pub fn new(query: Arc<dyn ListQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchItemsUseCase for FetchItemsUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        page: PageParams,
    ) -> Result<Page<TodoItem>, FetchItemsError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| FetchItemsError::QueryError(e.to_string()))?
            .ok_or(FetchItemsError::ListNotFound)?;

        authorize(principal, Action::Read, list.owner_id)
            .map_err(|_| FetchItemsError::AccessDenied)?;

        let (items, total) = self
            .query
            .list_items(list_id, page.skip(), page.limit())
            .await
            .map_err(|e| FetchItemsError::QueryError(e.to_string()))?;

        Ok(Page::new(items, total, page))
    }
}
