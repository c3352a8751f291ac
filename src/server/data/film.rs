//! Film repository and reads over the film link tables.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{CharacterModel, FilmModel, PlanetModel, StarshipModel};

/// Reads and writes films
pub struct FilmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmRepository<'a, C> {
    /// Creates a new instance of [`FilmRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a film with the given title
    pub async fn create(&self, title: String) -> Result<FilmModel, DbErr> {
        let film = entity::film::ActiveModel {
            title: ActiveValue::Set(title),
            ..Default::default()
        };

        film.insert(self.db).await
    }

    /// Lists every film ordered by id
    pub async fn get_all(&self) -> Result<Vec<FilmModel>, DbErr> {
        entity::prelude::Film::find()
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a film by id
    pub async fn get_by_id(&self, film_id: i32) -> Result<Option<FilmModel>, DbErr> {
        entity::prelude::Film::find_by_id(film_id).one(self.db).await
    }

    /// Renames a film, returns `None` if the film does not exist
    pub async fn update(&self, film_id: i32, title: String) -> Result<Option<FilmModel>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(film_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut film_am = film.into_active_model();
        film_am.title = ActiveValue::Set(title);

        let film = film_am.update(self.db).await?;

        Ok(Some(film))
    }

    /// Deletes a film along with every link to it
    pub async fn delete(&self, film_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Film::delete_by_id(film_id)
            .exec(self.db)
            .await
    }

    /// Characters appearing in the film
    pub async fn get_characters(&self, film_id: i32) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::Film)
            .filter(entity::film::Column::Id.eq(film_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Planets shown in the film
    pub async fn get_planets(&self, film_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .inner_join(entity::prelude::Film)
            .filter(entity::film::Column::Id.eq(film_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Starships shown in the film
    pub async fn get_starships(&self, film_id: i32) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .inner_join(entity::prelude::Film)
            .filter(entity::film::Column::Id.eq(film_id))
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod crud {
        use holonet_test_utils::prelude::*;

        use crate::server::data::film::FilmRepository;

        #[tokio::test]
        async fn creates_and_renames_film() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let film_repo = FilmRepository::new(&test.db);
            let film = film_repo.create("Episode IV".to_string()).await?;
            let renamed = film_repo
                .update(film.id, "A New Hope".to_string())
                .await?
                .unwrap();

            assert_eq!(renamed.id, film.id);
            assert_eq!(renamed.title, "A New Hope");
            assert_eq!(film_repo.get_all().await?, vec![renamed]);

            Ok(())
        }

        #[tokio::test]
        async fn returns_none_when_renaming_nonexistent_film() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let result = FilmRepository::new(&test.db)
                .update(6, "Return of the Jedi".to_string())
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod relations {
        use holonet_test_utils::prelude::*;

        use crate::server::data::{
            character::CharacterRepository, film::FilmRepository, planet::PlanetRepository,
        };

        /// Expect deleting a film to drop its links but keep the linked rows
        #[tokio::test]
        async fn delete_keeps_linked_rows() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let (luke, tatooine) = test
                .catalog()
                .insert_mock_character_with_homeworld("Luke Skywalker", "Tatooine")
                .await?;
            let film = test.catalog().insert_mock_film("A New Hope").await?;
            test.catalog().link_character_film(luke.id, film.id).await?;
            PlanetRepository::new(&test.db)
                .add_film(tatooine.id, film.id)
                .await?;

            let result = FilmRepository::new(&test.db).delete(film.id).await?;

            assert_eq!(result.rows_affected, 1);
            let character_repo = CharacterRepository::new(&test.db);
            assert!(character_repo.get_films(luke.id).await?.is_empty());
            assert!(character_repo.get_by_id(luke.id).await?.is_some());
            let planet_repo = PlanetRepository::new(&test.db);
            assert!(planet_repo.get_films(tatooine.id).await?.is_empty());

            Ok(())
        }
    }
}
