use async_trait::async_trait;

use crate::lists::application::domain::{TodoItem, TodoList};

#[derive(Debug, Clone)]
pub struct NewList {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ListChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub list_id: i32,
    pub content: String,
    pub order: i32,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub content: Option<String>,
    pub is_completed: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn create_list(&self, new_list: NewList) -> Result<TodoList, ListRepositoryError>;

    async fn update_list(
        &self,
        list_id: i32,
        changes: ListChanges,
    ) -> Result<TodoList, ListRepositoryError>;

    /// Removes the list together with all of its items in a single
    /// transaction. A concurrent delete loses with `NotFound`.
    async fn delete_list(&self, list_id: i32) -> Result<(), ListRepositoryError>;

    async fn create_item(&self, new_item: NewItem) -> Result<TodoItem, ListRepositoryError>;

    async fn update_item(
        &self,
        item_id: i32,
        changes: ItemChanges,
    ) -> Result<TodoItem, ListRepositoryError>;

    async fn delete_item(&self, item_id: i32) -> Result<(), ListRepositoryError>;
}
