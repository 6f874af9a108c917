use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::lists::adapter::outgoing::sea_orm_entity::{list_items, lists};
use crate::users::application::domain::User;
use crate::users::application::ports::outgoing::user_repository::{
    NewUser, UserChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            hashed_password: model.hashed_password,
            is_active: model.is_active,
            is_superuser: model.is_superuser,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            last_login: model.last_login.map(|dt| dt.with_timezone(&Utc)),
        }
    }

    fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::EmailAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            email: Set(new_user.email),
            full_name: Set(new_user.full_name),
            hashed_password: Set(new_user.hashed_password),
            is_active: Set(true),
            is_superuser: Set(new_user.is_superuser),
            created_at: NotSet,
            updated_at: NotSet,
            last_login: Set(None),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_user(inserted))
    }

    async fn update(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();

        if let Some(email) = changes.email {
            active_user.email = Set(email);
        }
        if let Some(full_name) = changes.full_name {
            active_user.full_name = Set(full_name);
        }
        if let Some(hashed_password) = changes.hashed_password {
            active_user.hashed_password = Set(hashed_password);
        }
        if let Some(is_active) = changes.is_active {
            active_user.is_active = Set(is_active);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_user(updated))
    }

    /// Removes the user, their lists, and all items on those lists in one
    /// transaction. The ON DELETE CASCADE constraints would get there too;
    /// doing it explicitly keeps the behavior independent of schema
    /// details and gives one commit point.
    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let user = UserEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let list_ids: Vec<i32> = lists::Entity::find()
            .filter(lists::Column::OwnerId.eq(user_id))
            .all(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|l| l.id)
            .collect();

        if !list_ids.is_empty() {
            list_items::Entity::delete_many()
                .filter(list_items::Column::ListId.is_in(list_ids))
                .exec(&txn)
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

            lists::Entity::delete_many()
                .filter(lists::Column::OwnerId.eq(user_id))
                .exec(&txn)
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        }

        user.delete(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_active(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_active = Set(is_active);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_user(updated))
    }

    async fn record_login(
        &self,
        user_id: i32,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.last_login = Set(Some(at.into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
