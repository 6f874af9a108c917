use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoItem;
use crate::lists::application::ports::outgoing::{
    ListQuery, ListRepository, ListRepositoryError, NewItem,
};

#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub enum CreateItemError {
    ListNotFound,
    AccessDenied,
    EmptyContent,
    RepositoryError(String),
}

impl std::fmt::Display for CreateItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateItemError::ListNotFound => write!(f, "List not found"),
            CreateItemError::AccessDenied => write!(f, "Not allowed to modify this list"),
            CreateItemError::EmptyContent => write!(f, "Content must not be empty"),
            CreateItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateItemError {}

#[async_trait]
pub trait ICreateItemUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        request: CreateItemRequest,
    ) -> Result<TodoItem, CreateItemError>;
}

pub struct CreateItemUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl CreateItemUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl ICreateItemUseCase for CreateItemUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        request: CreateItemRequest,
    ) -> Result<TodoItem, CreateItemError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| CreateItemError::RepositoryError(e.to_string()))?
            .ok_or(CreateItemError::ListNotFound)?;

        authorize(principal, Action::Update, list.owner_id)
            .map_err(|_| CreateItemError::AccessDenied)?;

        let content = request.content.trim().to_string();
        if content.is_empty() {
            return Err(CreateItemError::EmptyContent);
        }

        // The list can disappear between the ownership check and the
        // insert; the repository reports that as NotFound.
        self.repository
            .create_item(NewItem {
                list_id,
                content,
                order: request.order,
            })
            .await
            .map_err(|e| match e {
                ListRepositoryError::NotFound => CreateItemError::ListNotFound,
                other => CreateItemError::RepositoryError(other.to_string()),
            })
    }
}
