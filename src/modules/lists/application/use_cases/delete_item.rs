use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::ports::outgoing::{
    ListQuery, ListRepository, ListRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteItemError {
    NotFound,
    AccessDenied,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteItemError::NotFound => write!(f, "Item not found"),
            DeleteItemError::AccessDenied => write!(f, "Not allowed to delete this item"),
            DeleteItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteItemError {}

#[async_trait]
pub trait IDeleteItemUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
    ) -> Result<(), DeleteItemError>;
}

pub struct DeleteItemUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl DeleteItemUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IDeleteItemUseCase for DeleteItemUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
    ) -> Result<(), DeleteItemError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| DeleteItemError::RepositoryError(e.to_string()))?
            .ok_or(DeleteItemError::NotFound)?;

        authorize(principal, Action::Delete, list.owner_id)
            .map_err(|_| DeleteItemError::AccessDenied)?;

        self.query
            .find_item_by_id(item_id)
            .await
            .map_err(|e| DeleteItemError::RepositoryError(e.to_string()))?
            .filter(|i| i.list_id == list_id)
            .ok_or(DeleteItemError::NotFound)?;

        self.repository
            .delete_item(item_id)
            .await
            .map_err(|e| match e {
                ListRepositoryError::NotFound => DeleteItemError::NotFound,
                other => DeleteItemError::RepositoryError(other.to_string()),
            })
    }
}
