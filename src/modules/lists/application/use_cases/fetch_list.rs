use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::ports::outgoing::ListQuery;

/// A list together with all of its items in display order.
#[derive(Debug, Clone)]
pub struct ListWithItems {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone)]
pub enum FetchListError {
    NotFound,
    AccessDenied,
    QueryError(String),
}

impl std::fmt::Display for FetchListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchListError::NotFound => write!(f, "List not found"),
            FetchListError::AccessDenied => write!(f, "Not allowed to view this list"),
            FetchListError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchListError {}

#[async_trait]
pub trait IFetchListUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
    ) -> Result<ListWithItems, FetchListError>;
}

pub struct FetchListUseCase {
    query: Arc<dyn ListQuery>,
}

impl FetchListUseCase {
    pub fn new(query: Arc<dyn ListQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchListUseCase for FetchListUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
    ) -> Result<ListWithItems, FetchListError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| FetchListError::QueryError(e.to_string()))?
            .ok_or(FetchListError::NotFound)?;

        authorize(principal, Action::Read, list.owner_id)
            .map_err(|_| FetchListError::AccessDenied)?;

        let items = self
            .query
            .items_for_list(list_id)
            .await
            .map_err(|e| FetchListError::QueryError(e.to_string()))?;

        Ok(ListWithItems { list, items })
    }
}
