//! User service layer.
//!
//! Account creation and lookups. Passwords are stored as received and are never part of
//! any value this service returns.


use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NewUserDto, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{not_found::NotFoundError, validation::require, Error},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to retrieve
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::NotFoundError)` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(NotFoundError::User(user_id))?;

        Ok(UserDto::from(user))
    }

    /// Registers a new, active user.
    ///
    /// Required fields are checked in the order name, last name, password, email and the
    /// first missing one is reported.
    ///
    /// # Arguments
    /// - `new_user` - Request body, every field must be present
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - A required field is missing
    /// - `Err(Error::Conflict)` - The email is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, new_user: NewUserDto) -> Result<UserDto, Error> {
        let name = require(new_user.name, "name")?;
        let last_name = require(new_user.last_name, "last_name")?;
        let password = require(new_user.password, "password")?;
        let email = require(new_user.email, "email")?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(Error::Conflict(format!(
                "User with email {} already exists",
                email
            )));
        }

        let user = user_repo
            .create(NewUser {
                name,
                last_name,
                email,
                password,
            })
            .await?;

        tracing::info!("Created user ID {}", user.id);

        Ok(UserDto::from(user))
    }
}
