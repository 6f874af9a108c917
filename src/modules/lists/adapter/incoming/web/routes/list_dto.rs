use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::use_cases::ListWithItems;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListDto {
    pub id: i32,
    pub owner_id: i32,
    #[schema(example = "Groceries")]
    pub title: String,
    pub description: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoList> for ListDto {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            owner_id: list.owner_id,
            title: list.title,
            description: list.description,
            is_archived: list.is_archived,
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub list_id: i32,
    #[schema(example = "Buy milk")]
    pub content: String,
    pub is_completed: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoItem> for ItemDto {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            list_id: item.list_id,
            content: item.content,
            is_completed: item.is_completed,
            order: item.order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// A list with its items inlined, as returned by the single-list read.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListWithItemsDto {
    #[serde(flatten)]
    pub list: ListDto,
    pub items: Vec<ItemDto>,
}

impl From<ListWithItems> for ListWithItemsDto {
    fn from(value: ListWithItems) -> Self {
        Self {
            list: ListDto::from(value.list),
            items: value.items.into_iter().map(ItemDto::from).collect(),
        }
    }
}
