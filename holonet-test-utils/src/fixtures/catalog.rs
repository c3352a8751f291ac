//! Catalog fixture utilities.
//!
//! Inserts planets, characters, starships and films with standard descriptive values,
//! and links them through the association tables.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        TEST_CHARACTER_HEIGHT, TEST_CHARACTER_MASS, TEST_PLANET_CLIMATE, TEST_PLANET_POPULATION,
        TEST_STARSHIP_MGLT, TEST_STARSHIP_MODEL,
    },
    error::TestError,
    model::{CharacterModel, FilmModel, PlanetModel, StarshipModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_planet(
        &self,
        name: impl Into<String>,
    ) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.into()),
                climate: ActiveValue::Set(Some(TEST_PLANET_CLIMATE.to_string())),
                population: ActiveValue::Set(Some(TEST_PLANET_POPULATION.to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_character(
        &self,
        name: impl Into<String>,
        homeworld_id: i32,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.into()),
                height: ActiveValue::Set(Some(TEST_CHARACTER_HEIGHT.to_string())),
                mass: ActiveValue::Set(Some(TEST_CHARACTER_MASS.to_string())),
                homeworld_id: ActiveValue::Set(homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a mock planet and a character living on it
    pub async fn insert_mock_character_with_homeworld(
        &self,
        name: impl Into<String>,
        homeworld_name: impl Into<String>,
    ) -> Result<(CharacterModel, PlanetModel), TestError> {
        let planet = self.insert_mock_planet(homeworld_name).await?;
        let character = self.insert_mock_character(name, planet.id).await?;

        Ok((character, planet))
    }

    pub async fn insert_mock_starship(
        &self,
        name: impl Into<String>,
    ) -> Result<StarshipModel, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.into()),
                model: ActiveValue::Set(Some(TEST_STARSHIP_MODEL.to_string())),
                mglt: ActiveValue::Set(Some(TEST_STARSHIP_MGLT.to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_film(&self, title: impl Into<String>) -> Result<FilmModel, TestError> {
        Ok(
            entity::prelude::Film::insert(entity::film::ActiveModel {
                title: ActiveValue::Set(title.into()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn link_character_film(
        &self,
        character_id: i32,
        film_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::CharacterFilm::insert(entity::character_film::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            film_id: ActiveValue::Set(film_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn link_character_starship(
        &self,
        character_id: i32,
        starship_id: i32,
    ) -> Result<(), TestError> {
        entity::prelude::CharacterStarship::insert(entity::character_starship::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            starship_id: ActiveValue::Set(starship_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
