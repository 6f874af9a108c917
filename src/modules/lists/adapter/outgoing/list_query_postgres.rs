use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::ports::outgoing::list_query::{ListQuery, ListQueryError};

use super::sea_orm_entity::list_items::{
    Column as ItemColumn, Entity as ItemEntity, Model as ItemModel,
};
use super::sea_orm_entity::lists::{
    Column as ListColumn, Entity as ListEntity, Model as ListModel,
};

#[derive(Clone, Debug)]
pub struct ListQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_list(model: ListModel) -> TodoList {
        TodoList {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            description: model.description,
            is_archived: model.is_archived,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }

    fn map_to_item(model: ItemModel) -> TodoItem {
        TodoItem {
            id: model.id,
            list_id: model.list_id,
            content: model.content,
            is_completed: model.is_completed,
            order: model.order,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl ListQuery for ListQueryPostgres {
    async fn find_list_by_id(&self, list_id: i32) -> Result<Option<TodoList>, ListQueryError> {
        let list = ListEntity::find_by_id(list_id)
            .one(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        Ok(list.map(Self::map_to_list))
    }

    async fn list_for_owner(
        &self,
        owner_id: i32,
        skip: u64,
        limit: u64,
        include_archived: bool,
    ) -> Result<(Vec<TodoList>, u64), ListQueryError> {
        let mut filter = ListEntity::find().filter(ListColumn::OwnerId.eq(owner_id));
        if !include_archived {
            filter = filter.filter(ListColumn::IsArchived.eq(false));
        }

        let total = filter
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        let lists = filter
            .order_by_asc(ListColumn::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        Ok((lists.into_iter().map(Self::map_to_list).collect(), total))
    }

    async fn find_item_by_id(&self, item_id: i32) -> Result<Option<TodoItem>, ListQueryError> {
        let item = ItemEntity::find_by_id(item_id)
            .one(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        Ok(item.map(Self::map_to_item))
    }

    async fn items_for_list(&self, list_id: i32) -> Result<Vec<TodoItem>, ListQueryError> {
        let items = ItemEntity::find()
            .filter(ItemColumn::ListId.eq(list_id))
            .order_by_asc(ItemColumn::Order)
            .order_by_asc(ItemColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        Ok(items.into_iter().map(Self::map_to_item).collect())
    }

    async fn list_items(
        &self,
        list_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<TodoItem>, u64), ListQueryError> {
        let filter = ItemEntity::find().filter(ItemColumn::ListId.eq(list_id));

        let total = filter
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        let items = filter
            .order_by_asc(ItemColumn::Order)
            .order_by_asc(ItemColumn::Id)
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| ListQueryError::DatabaseError(e.to_string()))?;

        Ok((items.into_iter().map(Self::map_to_item).collect(), total))
    }
}
