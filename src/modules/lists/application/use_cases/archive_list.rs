use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoList;
use crate::lists::application::ports::outgoing::{ListChanges, ListQuery, ListRepository};

#[derive(Debug, Clone)]
pub enum ArchiveListError {
    NotFound,
    AccessDenied,
    RepositoryError(String),
}

impl std::fmt::Display for ArchiveListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveListError::NotFound => write!(f, "List not found"),
            ArchiveListError::AccessDenied => write!(f, "Not allowed to archive this list"),
            ArchiveListError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ArchiveListError {}

#[async_trait]
pub trait IArchiveListUseCase: Send + Sync {
    /// Sets `is_archived`. Idempotent; archiving an archived list is a
    /// no-op success.
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        archived: bool,
    ) -> Result<TodoList, ArchiveListError>;
}

pub struct ArchiveListUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl ArchiveListUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IArchiveListUseCase for ArchiveListUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        archived: bool,
    ) -> Result<TodoList, ArchiveListError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| ArchiveListError::RepositoryError(e.to_string()))?
            .ok_or(ArchiveListError::NotFound)?;

        authorize(principal, Action::Archive, list.owner_id)
            .map_err(|_| ArchiveListError::AccessDenied)?;

        if list.is_archived == archived {
            debug!(list_id, archived, "Archive state unchanged");
            return Ok(list);
        }

        self.repository
            .update_list(
                list_id,
                ListChanges {
                    is_archived: Some(archived),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| ArchiveListError::RepositoryError(e.to_string()))
    }
}
