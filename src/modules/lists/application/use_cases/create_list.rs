use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::Principal;
use crate::lists::application::domain::TodoList;
use crate::lists::application::ports::outgoing::{ListRepository, NewList};

#[derive(Debug, Clone)]
pub struct CreateListRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CreateListError {
    EmptyTitle,
    RepositoryError(String),
}

impl std::fmt::Display for CreateListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateListError::EmptyTitle => write!(f, "Title must not be empty"),
            CreateListError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateListError {}

#[async_trait]
pub trait ICreateListUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        request: CreateListRequest,
    ) -> Result<TodoList, CreateListError>;
}

pub struct CreateListUseCase {
    repository: Arc<dyn ListRepository>,
}

impl CreateListUseCase {
    pub fn new(repository: Arc<dyn ListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ICreateListUseCase for CreateListUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        request: CreateListRequest,
    ) -> Result<TodoList, CreateListError> {
        let title = request.title.trim().to_string();
        if title.is_empty() {
            return Err(CreateListError::EmptyTitle);
        }

        // A blank description is stored as no description at all.
        let description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let list = self
            .repository
            .create_list(NewList {
                owner_id: principal.user_id,
                title,
                description,
            })
            .await
            .map_err(|e| CreateListError::RepositoryError(e.to_string()))?;

        info!(list_id = list.id, owner_id = list.owner_id, "List created");
        Ok(list)
    }
}
