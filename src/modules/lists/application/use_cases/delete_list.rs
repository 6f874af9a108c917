use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::ports::outgoing::{
    ListQuery, ListRepository, ListRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteListError {
    NotFound,
    AccessDenied,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteListError::NotFound => write!(f, "List not found"),
            DeleteListError::AccessDenied => write!(f, "Not allowed to delete this list"),
            DeleteListError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteListError {}

#[async_trait]
pub trait IDeleteListUseCase: Send + Sync {
    async fn execute(&self, principal: &Principal, list_id: i32) -> Result<(), DeleteListError>;
}

pub struct DeleteListUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl DeleteListUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IDeleteListUseCase for DeleteListUseCase {
    async fn execute(&self, principal: &Principal, list_id: i32) -> Result<(), DeleteListError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| DeleteListError::RepositoryError(e.to_string()))?
            .ok_or(DeleteListError::NotFound)?;

        authorize(principal, Action::Delete, list.owner_id)
            .map_err(|_| DeleteListError::AccessDenied)?;

        // The repository removes the items and the list in one transaction.
        // A concurrent delete surfaces as NotFound, which is retry-safe.
        self.repository
            .delete_list(list_id)
            .await
            .map_err(|e| match e {
                ListRepositoryError::NotFound => DeleteListError::NotFound,
                other => DeleteListError::RepositoryError(other.to_string()),
            })?;

        info!(list_id, "List deleted");
        Ok(())
    }
}
