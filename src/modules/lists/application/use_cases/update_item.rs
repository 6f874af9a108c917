use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoItem;
use crate::lists::application::ports::outgoing::{
    ItemChanges, ListQuery, ListRepository, ListRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateItemRequest {
    pub content: Option<String>,
    pub is_completed: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub enum UpdateItemError {
    NotFound,
    AccessDenied,
    EmptyContent,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateItemError::NotFound => write!(f, "Item not found"),
            UpdateItemError::AccessDenied => write!(f, "Not allowed to modify this item"),
            UpdateItemError::EmptyContent => write!(f, "Content must not be empty"),
            UpdateItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateItemError {}

#[async_trait]
pub trait IUpdateItemUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
        request: UpdateItemRequest,
    ) -> Result<TodoItem, UpdateItemError>;
}

pub struct UpdateItemUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl UpdateItemUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IUpdateItemUseCase for UpdateItemUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
        request: UpdateItemRequest,
    ) -> Result<TodoItem, UpdateItemError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?
            .ok_or(UpdateItemError::NotFound)?;

        authorize(principal, Action::Update, list.owner_id)
            .map_err(|_| UpdateItemError::AccessDenied)?;

        let item = self
            .query
            .find_item_by_id(item_id)
            .await
            .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?
            .ok_or(UpdateItemError::NotFound)?;

        // An item reached through the wrong list does not exist as far as
        // the caller is concerned.
        if item.list_id != list_id {
            return Err(UpdateItemError::NotFound);
        }

        let mut changes = ItemChanges::default();

        if let Some(content) = request.content {
            let content = content.trim().to_string();
            if content.is_empty() {
                return Err(UpdateItemError::EmptyContent);
            }
            changes.content = Some(content);
        }

        changes.is_completed = request.is_completed;
        changes.order = request.order;

        self.repository
            .update_item(item_id, changes)
            .await
            .map_err(|e| match e {
                ListRepositoryError::NotFound => UpdateItemError::NotFound,
                other => UpdateItemError::RepositoryError(other.to_string()),
            })
    }
}
