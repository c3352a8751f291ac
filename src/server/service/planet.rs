//! Planet service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{PlanetDetailsDto, PlanetDto, PlanetFieldsDto, PlanetUpdateDto},
    server::{
        data::planet::PlanetRepository,
        error::{not_found::NotFoundError, validation::require, Error},
    },
};

/// Service for reading, creating and updating catalog planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a planet by ID, or [`NotFoundError::Planet`] if it does not exist
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(NotFoundError::Planet(planet_id))?;

        Ok(PlanetDto::from(planet))
    }

    /// Creates a planet, only `name` is required
    pub async fn create_planet(&self, fields: PlanetFieldsDto) -> Result<PlanetDto, Error> {
        let name = require(fields.name, "name")?;

        let planet = PlanetRepository::new(self.db)
            .create(name, fields.details)
            .await?;

        tracing::info!("Created planet ID {}", planet.id);

        Ok(PlanetDto::from(planet))
    }

    /// Renames an existing planet when a name is provided.
    ///
    /// Descriptive columns are never touched here.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The planet after the update
    /// - `Err(Error::NotFoundError)` - No planet with the provided ID, nothing is created
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_planet(
        &self,
        planet_id: i32,
        update: PlanetUpdateDto,
    ) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .update(planet_id, update.name, PlanetDetailsDto::default())
            .await?
            .ok_or(NotFoundError::Planet(planet_id))?;

        Ok(PlanetDto::from(planet))
    }
}
