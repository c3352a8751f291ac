//! Character service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, NewCharacterDto},
    server::{
        data::{
            character::{CharacterRepository, NewCharacter},
            planet::PlanetRepository,
        },
        error::{not_found::NotFoundError, validation::require, Error},
    },
};

/// Service for reading and creating catalog characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character with its homeworld
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Gets a character by ID
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The character with its homeworld
    /// - `Err(Error::NotFound)` - No character has this ID
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(NotFoundError::Character(character_id))?;

        Ok(CharacterDto::from(character))
    }

    /// Creates a character living on an existing planet.
    ///
    /// The request's `weight` is stored as the character's mass. Required fields are
    /// checked in the order name, height, weight, homeworld before the homeworld is
    /// looked up.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character with its homeworld name
    /// - `Err(Error::ValidationError)` - A required field is missing
    /// - `Err(Error::NotFoundError)` - The homeworld planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_character(
        &self,
        new_character: NewCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let name = require(new_character.name, "name")?;
        let height = require(new_character.height, "height")?;
        let mass = require(new_character.weight, "weight")?;
        let homeworld_id = require(new_character.homeworld_id, "homeworld_id")?;

        let homeworld = PlanetRepository::new(self.db)
            .get_by_id(homeworld_id)
            .await?
            .ok_or(NotFoundError::Planet(homeworld_id))?;

        let character = CharacterRepository::new(self.db)
            .create(NewCharacter {
                name,
                height,
                mass,
                homeworld_id,
                details: new_character.details,
            })
            .await?;

        tracing::info!("Created character ID {}", character.id);

        Ok(CharacterDto::from((character, Some(homeworld))))
    }
}
