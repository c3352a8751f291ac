//! User and favorite fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_USER_LAST_NAME, TEST_USER_PASSWORD},
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_mock_user(&self, email: impl Into<String>) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set("Leia".to_string()),
                last_name: ActiveValue::Set(TEST_USER_LAST_NAME.to_string()),
                email: ActiveValue::Set(email.into()),
                password: ActiveValue::Set(TEST_USER_PASSWORD.to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(
            entity::prelude::FavoriteCharacter::insert(entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipModel, TestError> {
        Ok(
            entity::prelude::FavoriteStarship::insert(entity::favorite_starship::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                starship_id: ActiveValue::Set(starship_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
