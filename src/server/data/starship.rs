//! Starship repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TryIntoModel,
};

use super::set_if_some;
use crate::{
    model::starship::StarshipDetailsDto,
    server::model::db::{CharacterModel, FilmModel, StarshipModel},
};

/// Reads and writes starships and their film links
pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a starship, descriptive columns not provided stay `NULL`
    pub async fn create(
        &self,
        name: String,
        details: StarshipDetailsDto,
    ) -> Result<StarshipModel, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(name),
            model: ActiveValue::Set(details.model),
            manufacturer: ActiveValue::Set(details.manufacturer),
            cost_in_credits: ActiveValue::Set(details.cost_in_credits),
            length: ActiveValue::Set(details.length),
            max_atmosphering_speed: ActiveValue::Set(details.max_atmosphering_speed),
            crew: ActiveValue::Set(details.crew),
            passengers: ActiveValue::Set(details.passengers),
            cargo_capacity: ActiveValue::Set(details.cargo_capacity),
            consumables: ActiveValue::Set(details.consumables),
            hyperdrive_rating: ActiveValue::Set(details.hyperdrive_rating),
            mglt: ActiveValue::Set(details.mglt),
            starship_class: ActiveValue::Set(details.starship_class),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    /// Lists every starship ordered by id
    pub async fn get_all(&self) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a starship by id
    pub async fn get_by_id(&self, starship_id: i32) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    /// Applies the provided fields, returns `None` if the starship does not exist
    pub async fn update(
        &self,
        starship_id: i32,
        name: Option<String>,
        details: StarshipDetailsDto,
    ) -> Result<Option<StarshipModel>, DbErr> {
        let Some(starship) = entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut starship_am = starship.into_active_model();
        if let Some(name) = name {
            starship_am.name = ActiveValue::Set(name);
        }
        set_if_some(&mut starship_am.model, details.model);
        set_if_some(&mut starship_am.manufacturer, details.manufacturer);
        set_if_some(&mut starship_am.cost_in_credits, details.cost_in_credits);
        set_if_some(&mut starship_am.length, details.length);
        set_if_some(
            &mut starship_am.max_atmosphering_speed,
            details.max_atmosphering_speed,
        );
        set_if_some(&mut starship_am.crew, details.crew);
        set_if_some(&mut starship_am.passengers, details.passengers);
        set_if_some(&mut starship_am.cargo_capacity, details.cargo_capacity);
        set_if_some(&mut starship_am.consumables, details.consumables);
        set_if_some(&mut starship_am.hyperdrive_rating, details.hyperdrive_rating);
        set_if_some(&mut starship_am.mglt, details.mglt);
        set_if_some(&mut starship_am.starship_class, details.starship_class);

        if !starship_am.is_changed() {
            return Ok(Some(starship_am.try_into_model()?));
        }

        let starship = starship_am.update(self.db).await?;

        Ok(Some(starship))
    }

    /// Deletes a starship, its film and pilot links are removed by the store
    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id)
            .exec(self.db)
            .await
    }

    /// Links a starship to a film, returns false if they were already linked
    pub async fn add_film(&self, starship_id: i32, film_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::StarshipFilm::find_by_id((starship_id, film_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::StarshipFilm::insert(entity::starship_film::ActiveModel {
            starship_id: ActiveValue::Set(starship_id),
            film_id: ActiveValue::Set(film_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Films the starship appears in, ordered by id
    pub async fn get_films(&self, starship_id: i32) -> Result<Vec<FilmModel>, DbErr> {
        entity::prelude::Film::find()
            .inner_join(entity::prelude::Starship)
            .filter(entity::starship::Column::Id.eq(starship_id))
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await
    }

    /// Characters linked as pilots of the starship
    pub async fn get_pilots(&self, starship_id: i32) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::Starship)
            .filter(entity::starship::Column::Id.eq(starship_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }
}
