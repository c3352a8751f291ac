//! User repository.
//!
//! Deleting a user also removes the user's favorites, all within one transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
    TryIntoModel,
};

use crate::server::model::db::UserModel;

/// Validated values for a new user
pub struct NewUser {
    /// First name
    pub name: String,
    /// Last name
    pub last_name: String,
    /// Unique login email
    pub email: String,
    /// Password as provided, never serialized back
    pub password: String,
}

/// Partial update of a user; `None` keeps the stored value
#[derive(Default)]
pub struct UserChanges {
    /// New first name
    pub name: Option<String>,
    /// New last name
    pub last_name: Option<String>,
    /// New email, must stay unique
    pub email: Option<String>,
    /// New password
    pub password: Option<String>,
    /// Activate or deactivate the account
    pub is_active: Option<bool>,
}

/// Reads and writes registered users
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(&self, user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(user.name),
            last_name: ActiveValue::Set(user.last_name),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Lists every user ordered by id
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a user by id
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by exact email match
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies the provided changes, returns `None` if the user does not exist
    pub async fn update(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = changes.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(last_name) = changes.last_name {
            user_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password) = changes.password {
            user_am.password = ActiveValue::Set(password);
        }
        if let Some(is_active) = changes.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        if !user_am.is_changed() {
            return Ok(Some(user_am.try_into_model()?));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}

impl<'a> UserRepository<'a, DatabaseConnection> {
    /// Deletes a user together with every favorite it owns
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        entity::prelude::FavoriteStarship::delete_many()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result)
    }
}
