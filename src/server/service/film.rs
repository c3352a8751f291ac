//! Film service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::film::FilmDto,
    server::{
        data::film::FilmRepository,
        error::{not_found::NotFoundError, Error},
    },
};

/// Service for reading catalog films.
pub struct FilmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmService<'a> {
    /// Creates a new instance of FilmService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every film
    pub async fn get_films(&self) -> Result<Vec<FilmDto>, Error> {
        let films = FilmRepository::new(self.db).get_all().await?;

        Ok(films.into_iter().map(FilmDto::from).collect())
    }

    /// Gets a film by ID, or [`NotFoundError::Film`] if it does not exist
    pub async fn get_film(&self, film_id: i32) -> Result<FilmDto, Error> {
        let film = FilmRepository::new(self.db)
            .get_by_id(film_id)
            .await?
            .ok_or(NotFoundError::Film(film_id))?;

        Ok(FilmDto::from(film))
    }
}
