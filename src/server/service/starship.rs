//! Starship service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::starship::StarshipDto,
    server::{
        data::starship::StarshipRepository,
        error::{not_found::NotFoundError, Error},
    },
};

/// Service for reading catalog starships.
pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    /// Creates a new instance of StarshipService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every starship
    pub async fn get_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }

    /// Gets a starship by ID, or [`NotFoundError::Starship`] if it does not exist
    pub async fn get_starship(&self, starship_id: i32) -> Result<StarshipDto, Error> {
        let starship = StarshipRepository::new(self.db)
            .get_by_id(starship_id)
            .await?
            .ok_or(NotFoundError::Starship(starship_id))?;

        Ok(StarshipDto::from(starship))
    }
}
