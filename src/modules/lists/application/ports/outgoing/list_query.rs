use async_trait::async_trait;

use crate::lists::application::domain::{TodoItem, TodoList};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ListQuery: Send + Sync {
    async fn find_list_by_id(&self, list_id: i32) -> Result<Option<TodoList>, ListQueryError>;

    /// Lists owned by one user, ordered by id ascending. Archived lists are
    /// excluded unless `include_archived` is set.
    async fn list_for_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
        include_archived: bool,
    ) -> Result<(Vec<TodoList>, u64), ListQueryError>;

    async fn find_item_by_id(&self, item_id: i32) -> Result<Option<TodoItem>, ListQueryError>;

    /// Every item of one list in display order, unpaginated. Used when a
    /// list is returned together with its contents.
    async fn items_for_list(&self, list_id: i32) -> Result<Vec<TodoItem>, ListQueryError>;

    /// Items of one list, ordered by `order` ascending with id as the
    /// tie-break.
    async fn list_items(
        &self,
        list_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<TodoItem>, u64), ListQueryError>;
}
