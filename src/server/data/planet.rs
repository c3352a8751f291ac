//! Planet repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TryIntoModel,
};

use super::set_if_some;
use crate::{
    model::planet::PlanetDetailsDto,
    server::model::db::{CharacterModel, FilmModel, PlanetModel},
};

/// Reads and writes planets and their film links
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet, descriptive columns not provided stay `NULL`
    pub async fn create(
        &self,
        name: String,
        details: PlanetDetailsDto,
    ) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            rotation_period: ActiveValue::Set(details.rotation_period),
            orbital_period: ActiveValue::Set(details.orbital_period),
            diameter: ActiveValue::Set(details.diameter),
            climate: ActiveValue::Set(details.climate),
            gravity: ActiveValue::Set(details.gravity),
            terrain: ActiveValue::Set(details.terrain),
            surface_water: ActiveValue::Set(details.surface_water),
            population: ActiveValue::Set(details.population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Lists every planet ordered by id
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a planet by id
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Applies the provided fields, leaving every `None` column untouched
    ///
    /// Returns `None` if the planet does not exist; no row is created in that case.
    pub async fn update(
        &self,
        planet_id: i32,
        name: Option<String>,
        details: PlanetDetailsDto,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let Some(planet) = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut planet_am = planet.into_active_model();
        if let Some(name) = name {
            planet_am.name = ActiveValue::Set(name);
        }
        set_if_some(&mut planet_am.rotation_period, details.rotation_period);
        set_if_some(&mut planet_am.orbital_period, details.orbital_period);
        set_if_some(&mut planet_am.diameter, details.diameter);
        set_if_some(&mut planet_am.climate, details.climate);
        set_if_some(&mut planet_am.gravity, details.gravity);
        set_if_some(&mut planet_am.terrain, details.terrain);
        set_if_some(&mut planet_am.surface_water, details.surface_water);
        set_if_some(&mut planet_am.population, details.population);

        // Nothing to write, skip the UPDATE statement
        if !planet_am.is_changed() {
            return Ok(Some(planet_am.try_into_model()?));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet, its film links are removed by the store
    ///
    /// Fails while characters still reference the planet as their homeworld.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }

    /// Links a planet to a film, returns false if they were already linked
    pub async fn add_film(&self, planet_id: i32, film_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::PlanetFilm::find_by_id((planet_id, film_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::PlanetFilm::insert(entity::planet_film::ActiveModel {
            planet_id: ActiveValue::Set(planet_id),
            film_id: ActiveValue::Set(film_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Films the planet appears in, ordered by id
    pub async fn get_films(&self, planet_id: i32) -> Result<Vec<FilmModel>, DbErr> {
        entity::prelude::Film::find()
            .inner_join(entity::prelude::Planet)
            .filter(entity::planet::Column::Id.eq(planet_id))
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await
    }

    /// Characters whose homeworld is the given planet
    pub async fn get_residents(&self, planet_id: i32) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use holonet_test_utils::prelude::*;

        use crate::{model::planet::PlanetDetailsDto, server::data::planet::PlanetRepository};

        /// Expect the created planet to equal the one read back by ID
        #[tokio::test]
        async fn creates_planet() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let created = planet_repo
                .create(
                    "Hoth".to_string(),
                    PlanetDetailsDto {
                        climate: Some("frozen".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            let found = planet_repo.get_by_id(created.id).await?;
            assert_eq!(found, Some(created.clone()));
            assert_eq!(created.climate.as_deref(), Some("frozen"));
            assert!(created.terrain.is_none());

            Ok(())
        }

        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo
                .create("Hoth".to_string(), PlanetDetailsDto::default())
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update {
        use holonet_test_utils::prelude::*;

        use crate::{model::planet::PlanetDetailsDto, server::data::planet::PlanetRepository};

        /// Expect only the name to change when only a name is provided
        #[tokio::test]
        async fn updates_name_only() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_mock_planet("Tatooine").await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let updated = planet_repo
                .update(
                    planet.id,
                    Some("Tatooine II".to_string()),
                    PlanetDetailsDto::default(),
                )
                .await?
                .unwrap();

            assert_eq!(updated.name, "Tatooine II");
            assert_eq!(updated.climate, planet.climate);
            assert_eq!(updated.population, planet.population);

            Ok(())
        }

        /// Expect the planet unchanged when the update carries no fields
        #[tokio::test]
        async fn empty_update_keeps_planet() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_mock_planet("Tatooine").await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let updated = planet_repo
                .update(planet.id, None, PlanetDetailsDto::default())
                .await?;

            assert_eq!(updated, Some(planet));

            Ok(())
        }

        /// Expect Ok(None) and no row created for a nonexistent planet
        #[tokio::test]
        async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let planet_repo = PlanetRepository::new(&test.db);
            let result = planet_repo
                .update(5, Some("Alderaan".to_string()), PlanetDetailsDto::default())
                .await?;

            assert!(result.is_none());
            assert!(planet_repo.get_all().await?.is_empty());

            Ok(())
        }
    }

    mod relations {
        use holonet_test_utils::prelude::*;

        use crate::server::data::{film::FilmRepository, planet::PlanetRepository};

        /// Expect a planet-film link to be visible from both sides
        #[tokio::test]
        async fn film_link_is_symmetric() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_mock_planet("Hoth").await?;
            let film = test
                .catalog()
                .insert_mock_film("The Empire Strikes Back")
                .await?;

            let planet_repo = PlanetRepository::new(&test.db);
            assert!(planet_repo.add_film(planet.id, film.id).await?);
            assert!(!planet_repo.add_film(planet.id, film.id).await?);

            let films = planet_repo.get_films(planet.id).await?;
            assert_eq!(films, vec![film.clone()]);
            let planets = FilmRepository::new(&test.db).get_planets(film.id).await?;
            assert_eq!(planets, vec![planet]);

            Ok(())
        }

        #[tokio::test]
        async fn lists_residents() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let planet = test.catalog().insert_mock_planet("Tatooine").await?;
            let luke = test
                .catalog()
                .insert_mock_character("Luke Skywalker", planet.id)
                .await?;
            test.catalog()
                .insert_mock_character_with_homeworld("Leia Organa", "Alderaan")
                .await?;

            let residents = PlanetRepository::new(&test.db)
                .get_residents(planet.id)
                .await?;

            assert_eq!(residents, vec![luke]);

            Ok(())
        }

        /// Expect the store to refuse deleting a planet that is still a homeworld
        #[tokio::test]
        async fn delete_fails_while_planet_has_residents() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let (_, planet) = test
                .catalog()
                .insert_mock_character_with_homeworld("Luke Skywalker", "Tatooine")
                .await?;
            let empty = test.catalog().insert_mock_planet("Dagobah").await?;

            let planet_repo = PlanetRepository::new(&test.db);

            assert!(planet_repo.delete(planet.id).await.is_err());
            assert_eq!(planet_repo.delete(empty.id).await?.rows_affected, 1);

            Ok(())
        }
    }
}
