use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::lists::application::domain::{TodoItem, TodoList};
use crate::lists::application::ports::outgoing::list_repository::{
    ItemChanges, ListChanges, ListRepository, ListRepositoryError, NewItem, NewList,
};

use super::sea_orm_entity::list_items::{
    ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity, Model as ItemModel,
};
use super::sea_orm_entity::lists::{
    ActiveModel as ListActiveModel, Entity as ListEntity, Model as ListModel,
};

#[derive(Clone, Debug)]
pub struct ListRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListRepositoryPostgres {
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
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn map_to_item(model: ItemModel) -> TodoItem {
        TodoItem {
            id: model.id,
            list_id: model.list_id,
            content: model.content,
            is_completed: model.is_completed,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn map_insert_error(e: sea_orm::DbErr) -> ListRepositoryError {
        // A foreign key violation on insert means the parent list vanished
        // between the ownership check and the write.
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23503") || err_str.contains("foreign key") {
            return ListRepositoryError::NotFound;
        }
        ListRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ListRepository for ListRepositoryPostgres {
    async fn create_list(&self, new_list: NewList) -> Result<TodoList, ListRepositoryError> {
        let active_list = ListActiveModel {
            id: NotSet,
            owner_id: Set(new_list.owner_id),
            title: Set(new_list.title),
            description: Set(new_list.description),
            is_archived: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_list
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_list(inserted))
    }

    async fn update_list(
        &self,
        list_id: i32,
        changes: ListChanges,
    ) -> Result<TodoList, ListRepositoryError> {
        let list = ListEntity::find_by_id(list_id)
            .one(&*self.db)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ListRepositoryError::NotFound)?;

        let mut active_list: ListActiveModel = list.into();

        if let Some(title) = changes.title {
            active_list.title = Set(title);
        }
        if let Some(description) = changes.description {
            active_list.description = Set(description);
        }
        if let Some(is_archived) = changes.is_archived {
            active_list.is_archived = Set(is_archived);
        }

        let updated = active_list
            .update(&*self.db)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_list(updated))
    }

    /// Removes the list and all of its items in one transaction. The
    /// ON DELETE CASCADE constraint would get there too; doing it
    /// explicitly keeps the behavior independent of schema details and
    /// gives one commit point.
    async fn delete_list(&self, list_id: i32) -> Result<(), ListRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        let list = ListEntity::find_by_id(list_id)
            .one(&txn)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ListRepositoryError::NotFound)?;

        ItemEntity::delete_many()
            .filter(ItemColumn::ListId.eq(list_id))
            .exec(&txn)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        list.delete(&txn)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn create_item(&self, new_item: NewItem) -> Result<TodoItem, ListRepositoryError> {
        let active_item = ItemActiveModel {
            id: NotSet,
            list_id: Set(new_item.list_id),
            content: Set(new_item.content),
            is_completed: Set(false),
            order: Set(new_item.order),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_item
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_item(inserted))
    }

    async fn update_item(
        &self,
        item_id: i32,
        changes: ItemChanges,
    ) -> Result<TodoItem, ListRepositoryError> {
        let item = ItemEntity::find_by_id(item_id)
            .one(&*self.db)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ListRepositoryError::NotFound)?;

        let mut active_item: ItemActiveModel = item.into();

        if let Some(content) = changes.content {
            active_item.content = Set(content);
        }
        if let Some(is_completed) = changes.is_completed {
            active_item.is_completed = Set(is_completed);
        }
        if let Some(order) = changes.order {
            active_item.order = Set(order);
        }

        let updated = active_item
            .update(&*self.db)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_item(updated))
    }

    async fn delete_item(&self, item_id: i32) -> Result<(), ListRepositoryError> {
        let result = ItemEntity::delete_by_id(item_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ListRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ListRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn mock_list_model(id: i32, owner_id: i32) -> ListModel {
        let now = Utc::now();
        ListModel {
            id,
            owner_id,
            title: "Groceries".to_string(),
            description: None,
            is_archived: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn mock_item_model(id: i32, list_id: i32) -> ItemModel {
        let now = Utc::now();
        ItemModel {
            id,
            list_id,
            content: "Buy milk".to_string(),
            is_completed: false,
            order: 0,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_create_list_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_list_model(1, 7)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let list = repository
            .create_list(NewList {
                owner_id: 7,
                title: "Groceries".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(list.id, 1);
        assert_eq!(list.owner_id, 7);
        assert!(!list.is_archived);
    }

    #[tokio::test]
    async fn test_create_item_foreign_key_violation_maps_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"list_items\" violates foreign key constraint"
                    .to_string(),
            )])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let result = repository
            .create_item(NewItem {
                list_id: 99,
                content: "Orphan".to_string(),
                order: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_missing_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ListModel>::new()])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let result = repository.update_list(99, ListChanges::default()).await;

        assert!(matches!(result.unwrap_err(), ListRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_item_success() {
        let mut completed = mock_item_model(10, 1);
        completed.is_completed = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_item_model(10, 1)], vec![completed]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 10,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let item = repository
            .update_item(
                10,
                ItemChanges {
                    is_completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(item.is_completed);
    }

    #[tokio::test]
    async fn test_delete_missing_list_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ListModel>::new()])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let result = repository.delete_list(99).await;

        assert!(matches!(result.unwrap_err(), ListRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_item_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repository = ListRepositoryPostgres::new(Arc::new(db));
        let result = repository.delete_item(99).await;

        assert!(matches!(result.unwrap_err(), ListRepositoryError::NotFound));
    }
}
