use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::{authorize, Action, Principal};
use crate::lists::application::domain::TodoItem;
use crate::lists::application::ports::outgoing::{
    ItemChanges, ListQuery, ListRepository, ListRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ToggleItemError {
    NotFound,
    AccessDenied,
    RepositoryError(String),
}

impl std::fmt::Display for ToggleItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleItemError::NotFound => write!(f, "Item not found"),
            ToggleItemError::AccessDenied => write!(f, "Not allowed to modify this item"),
            ToggleItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ToggleItemError {}

#[async_trait]
pub trait IToggleItemUseCase: Send + Sync {
    /// Flips `is_completed` and returns the item in its new state.
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
    ) -> Result<TodoItem, ToggleItemError>;
}

pub struct ToggleItemUseCase {
    query: Arc<dyn ListQuery>,
    repository: Arc<dyn ListRepository>,
}

impl ToggleItemUseCase {
    pub fn new(query: Arc<dyn ListQuery>, repository: Arc<dyn ListRepository>) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IToggleItemUseCase for ToggleItemUseCase {
    async fn execute(
        &self,
        principal: &Principal,
        list_id: i32,
        item_id: i32,
    ) -> Result<TodoItem, ToggleItemError> {
        let list = self
            .query
            .find_list_by_id(list_id)
            .await
            .map_err(|e| ToggleItemError::RepositoryError(e.to_string()))?
            .ok_or(ToggleItemError::NotFound)?;

        authorize(principal, Action::Update, list.owner_id)
            .map_err(|_| ToggleItemError::AccessDenied)?;

        let item = self
            .query
            .find_item_by_id(item_id)
            .await
            .map_err(|e| ToggleItemError::RepositoryError(e.to_string()))?
            .filter(|i| i.list_id == list_id)
            .ok_or(ToggleItemError::NotFound)?;

        self.repository
            .update_item(
                item_id,
                ItemChanges {
                    is_completed: Some(!item.is_completed),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| match e {
                ListRepositoryError::NotFound => ToggleItemError::NotFound,
                other => ToggleItemError::RepositoryError(other.to_string()),
            })
    }
}
