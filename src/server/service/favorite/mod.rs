//! Favorite service layer.
//!
//! Favorite creation records the provided ids without checking that the user or the
//! target exist. The created favorite is returned with its target resolved, which is
//! `None` when the id did not match a row.


use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::CharacterDto,
        favorite::{
            FavoriteCharacterDto, FavoritePlanetDto, FavoriteStarshipDto, UserFavoritesDto,
        },
        planet::PlanetDto,
        starship::StarshipDto,
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, starship::StarshipRepository, user::UserRepository,
        },
        error::{not_found::NotFoundError, Error},
    },
};

/// Service for reading and recording users' favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the records a user has favorited, grouped by type.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user owning the favorites
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorited records in favorite creation order; favorites
    ///   whose record no longer exists are skipped
    /// - `Err(Error::NotFoundError)` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(NotFoundError::User(user_id))?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let characters = favorite_repo.get_characters_by_user_id(user_id).await?;
        let planets = favorite_repo.get_planets_by_user_id(user_id).await?;
        let starships = favorite_repo.get_starships_by_user_id(user_id).await?;

        Ok(UserFavoritesDto {
            favorite_characters: characters
                .into_iter()
                .filter_map(|(_, character)| character.map(CharacterDto::from))
                .collect(),
            favorite_planets: planets
                .into_iter()
                .filter_map(|(_, planet)| planet.map(PlanetDto::from))
                .collect(),
            favorite_starships: starships
                .into_iter()
                .filter_map(|(_, starship)| starship.map(StarshipDto::from))
                .collect(),
        })
    }

    /// Records a favorite character and returns it with the character resolved, if any
    pub async fn create_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .create_character(user_id, character_id)
            .await?;
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        tracing::debug!(
            "User ID {} favorited character ID {} (favorite ID {})",
            user_id,
            character_id,
            favorite.id
        );

        Ok(FavoriteCharacterDto::from((favorite, character)))
    }

    /// Records a favorite planet and returns it with the planet resolved, if any
    pub async fn create_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .create_planet(user_id, planet_id)
            .await?;
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        tracing::debug!(
            "User ID {} favorited planet ID {} (favorite ID {})",
            user_id,
            planet_id,
            favorite.id
        );

        Ok(FavoritePlanetDto::from((favorite, planet)))
    }

    /// Records a favorite starship and returns it with the starship resolved, if any
    pub async fn create_favorite_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipDto, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .create_starship(user_id, starship_id)
            .await?;
        let starship = StarshipRepository::new(self.db)
            .get_by_id(starship_id)
            .await?;

        tracing::debug!(
            "User ID {} favorited starship ID {} (favorite ID {})",
            user_id,
            starship_id,
            favorite.id
        );

        Ok(FavoriteStarshipDto::from((favorite, starship)))
    }
}
