use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoList;
use crate::lists::application::ports::outgoing::{ListChanges, ListQuery, ListRepository};

#[derive(Debug, Clone, Default)]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum UpdateListError {
    NotFound,
    AccessDenied,
    EmptyTitle,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateListError::NotFound => write!(f, "List not found"),
            UpdateListError::AccessDenied => write!(f, "Not allowed to update this list"),
            UpdateListError::EmptyTitle => write!(f, "Title must not be empty"),
            UpdateListError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateListError {}

#[async_trait]
pub trait IUpdateListUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        request: UpdateListRequest,
    ) -> Result<TodoList, UpdateListError>;
}

pub struct UpdateListUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl UpdateListUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IUpdateListUseCase for UpdateListUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        request: UpdateListRequest,
    ) -> Result<TodoList, UpdateListError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| UpdateListError::RepositoryError(e.to_string()))?
            .ok_or(UpdateListError::NotFound)?;

        authorize(principal, Action::Update, list.owner_id)
            .map_err(|_| UpdateListError::AccessDenied)?;

        let mut changes = ListChanges::default();

        if let Some(title) = request.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(UpdateListError::EmptyTitle);
            }
            changes.title = Some(title);
        }

        if let Some(description) = request.description {
            // A blank description clears the field.
            let description = description.trim().to_string();
            changes.description = Some(if description.is_empty() {
                None
            } else {
                Some(description)
            });
        }

        changes.is_archived = request.is_archived;

        self.repository
            .update_list(list_id, changes)
            .await
            .map_err(|e| UpdateListError::RepositoryError(e.to_string()))
    }
}
