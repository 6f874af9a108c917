//! In-memory fake of the list store, shared by the use case tests.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::ports::outgoing::{
    ItemChanges, ListChanges, ListQuery, ListQueryError, ListRepository, ListRepositoryError,
    NewItem, NewList,
};

pub struct InMemoryListStore {
    lists: Mutex<Vec<TodoList>>,
    items: Mutex<Vec<TodoItem>>,
    next_id: AtomicI32,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self {
            lists: Mutex::new(Vec::new()),
            items: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn with_list(self, list: TodoList) -> Self {
        self.next_id.fetch_max(list.id + 1, Ordering::SeqCst);
        self.lists.lock().unwrap().push(list);
        self
    }

    pub fn with_item(self, item: TodoItem) -> Self {
        self.next_id.fetch_max(item.id + 1, Ordering::SeqCst);
        self.items.lock().unwrap().push(item);
        self
    }

    pub fn list_count(&self) -> usize {
        self.lists.lock().unwrap().len()
    }

    pub fn item_count(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn allocate_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

pub fn sample_list(id: i32, owner_id: i32) -> TodoList {
    TodoList {
        id,
        owner_id,
        title: format!("List {}", id),
        description: None,
        is_archived: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_item(id: i32, list_id: i32, order: i32) -> TodoItem {
    TodoItem {
        id,
        list_id,
        content: format!("Item {}", id),
        is_completed: false,
        order,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl ListQuery for InMemoryListStore {
    async fn find_list_by_id(&self, list_id: i32) -> Result<Option<TodoList>, ListQueryError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == list_id)
            .cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
        include_archived: bool,
    ) -> Result<(Vec<TodoList>, u64), ListQueryError> {
        let mut matching: Vec<TodoList> = self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.owner_id == owner_id && (include_archived || !l.is_archived))
            .cloned()
            .collect();
        matching.sort_by_key(|l| l.id);

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find_item_by_id(&self, item_id: i32) -> Result<Option<TodoItem>, ListQueryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == item_id)
            .cloned())
    }

    async fn items_for_list(&self, list_id: i32) -> Result<Vec<TodoItem>, ListQueryError> {
        let mut matching: Vec<TodoItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect();
        matching.sort_by_key(|i| (i.order, i.id));
        Ok(matching)
    }

    async fn list_items(
        &self,
        list_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<TodoItem>, u64), ListQueryError> {
        let all = self.items_for_list(list_id).await?;
        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

#[async_trait]
impl ListRepository for InMemoryListStore {
    async fn create_list(&self, new_list: NewList) -> Result<TodoList, ListRepositoryError> {
        let now = Utc::now();
        let list = TodoList {
            id: self.allocate_id(),
            owner_id: new_list.owner_id,
            title: new_list.title,
            description: new_list.description,
            is_archived: false,
            created_at: now,
            updated_at: now,
        };
        self.lists.lock().unwrap().push(list.clone());
        Ok(list)
    }

    async fn update_list(
        &self,
        list_id: i32,
        changes: ListChanges,
    ) -> Result<TodoList, ListRepositoryError> {
        let mut lists = self.lists.lock().unwrap();
        let list = lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or(ListRepositoryError::NotFound)?;

        if let Some(title) = changes.title {
            list.title = title;
        }
        if let Some(description) = changes.description {
            list.description = description;
        }
        if let Some(is_archived) = changes.is_archived {
            list.is_archived = is_archived;
        }
        list.updated_at = Utc::now();
        Ok(list.clone())
    }

    async fn delete_list(&self, list_id: i32) -> Result<(), ListRepositoryError> {
        let mut lists = self.lists.lock().unwrap();
        let before = lists.len();
        lists.retain(|l| l.id != list_id);
        if lists.len() == before {
            return Err(ListRepositoryError::NotFound);
        }
        self.items.lock().unwrap().retain(|i| i.list_id != list_id);
        Ok(())
    }

    async fn create_item(&self, new_item: NewItem) -> Result<TodoItem, ListRepositoryError> {
        if !self
            .lists
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.id == new_item.list_id)
        {
            return Err(ListRepositoryError::NotFound);
        }

        let now = Utc::now();
        let item = TodoItem {
            id: self.allocate_id(),
            list_id: new_item.list_id,
            content: new_item.content,
            is_completed: false,
            order: new_item.order,
            created_at: now,
            updated_at: now,
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_item(
        &self,
        item_id: i32,
        changes: ItemChanges,
    ) -> Result<TodoItem, ListRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(ListRepositoryError::NotFound)?;

        if let Some(content) = changes.content {
            item.content = content;
        }
        if let Some(is_completed) = changes.is_completed {
            item.is_completed = is_completed;
        }
        if let Some(order) = changes.order {
            item.order = order;
        }
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn delete_item(&self, item_id: i32) -> Result<(), ListRepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != item_id);
        if items.len() == before {
            return Err(ListRepositoryError::NotFound);
        }
        Ok(())
    }
}
