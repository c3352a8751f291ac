//! Character repository.
//!
//! Characters always belong to a homeworld planet, reads return them joined with it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TryIntoModel,
};

use super::set_if_some;
use crate::{
    model::character::CharacterDetailsDto,
    server::model::db::{CharacterModel, CharacterWithHomeworld, FilmModel, StarshipModel},
};

/// Validated values for a new character
pub struct NewCharacter {
    /// Display name
    pub name: String,
    /// Height as sent by the client, stored as text
    pub height: String,
    /// Mass, filled from the request's `weight` field
    pub mass: String,
    /// Planet the character comes from
    pub homeworld_id: i32,
    /// Optional descriptive columns
    pub details: CharacterDetailsDto,
}

/// Partial update of a character; `None` keeps the stored value
#[derive(Default)]
pub struct CharacterChanges {
    /// New display name
    pub name: Option<String>,
    /// New height
    pub height: Option<String>,
    /// New mass
    pub mass: Option<String>,
    /// New homeworld planet
    pub homeworld_id: Option<i32>,
    /// Descriptive columns, only the provided ones are written
    pub details: CharacterDetailsDto,
}

/// Reads and writes characters and their film and starship links
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character, the homeworld must already exist
    pub async fn create(&self, character: NewCharacter) -> Result<CharacterModel, DbErr> {
        let details = character.details;
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            height: ActiveValue::Set(Some(character.height)),
            mass: ActiveValue::Set(Some(character.mass)),
            hair_color: ActiveValue::Set(details.hair_color),
            skin_color: ActiveValue::Set(details.skin_color),
            eye_color: ActiveValue::Set(details.eye_color),
            birth_year: ActiveValue::Set(details.birth_year),
            gender: ActiveValue::Set(details.gender),
            homeworld_id: ActiveValue::Set(character.homeworld_id),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Lists every character along with its homeworld
    pub async fn get_all(&self) -> Result<Vec<CharacterWithHomeworld>, DbErr> {
        entity::prelude::Character::find()
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a character with its homeworld, `None` if the id is unknown
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<CharacterWithHomeworld>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// Applies the provided changes, returns `None` if the character does not exist
    pub async fn update(
        &self,
        character_id: i32,
        changes: CharacterChanges,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let Some(character) = entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut character_am = character.into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(homeworld_id) = changes.homeworld_id {
            character_am.homeworld_id = ActiveValue::Set(homeworld_id);
        }
        set_if_some(&mut character_am.height, changes.height);
        set_if_some(&mut character_am.mass, changes.mass);
        set_if_some(&mut character_am.hair_color, changes.details.hair_color);
        set_if_some(&mut character_am.skin_color, changes.details.skin_color);
        set_if_some(&mut character_am.eye_color, changes.details.eye_color);
        set_if_some(&mut character_am.birth_year, changes.details.birth_year);
        set_if_some(&mut character_am.gender, changes.details.gender);

        if !character_am.is_changed() {
            return Ok(Some(character_am.try_into_model()?));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character, its film and starship links are removed by the store
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }

    /// Links a character to a film, returns false if they were already linked
    pub async fn add_film(&self, character_id: i32, film_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::CharacterFilm::find_by_id((character_id, film_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::CharacterFilm::insert(entity::character_film::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            film_id: ActiveValue::Set(film_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Links a character to a starship it pilots, returns false if already linked
    pub async fn add_starship(&self, character_id: i32, starship_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::CharacterStarship::find_by_id((character_id, starship_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::CharacterStarship::insert(entity::character_starship::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            starship_id: ActiveValue::Set(starship_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Films the character appears in, ordered by id
    pub async fn get_films(&self, character_id: i32) -> Result<Vec<FilmModel>, DbErr> {
        entity::prelude::Film::find()
            .inner_join(entity::prelude::Character)
            .filter(entity::character::Column::Id.eq(character_id))
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await
    }

    /// Starships the character has flown, ordered by id
    pub async fn get_starships(&self, character_id: i32) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .inner_join(entity::prelude::Character)
            .filter(entity::character::Column::Id.eq(character_id))
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }
}
