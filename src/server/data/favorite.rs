//! Favorites reference their targets by plain id without store-level foreign keys, so a
//! favorite may outlive its target. Reads pair each favorite with its target in a second
//! batch query and yield `None` for targets that no longer exist.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::{
    CharacterWithHomeworld, FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel,
    PlanetModel, StarshipModel,
};

/// Records favorites and reads them back paired with their targets
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a favorite character; neither id is checked for existence
    pub async fn create_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Records a favorite planet; neither id is checked for existence
    pub async fn create_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Records a favorite starship; neither id is checked for existence
    pub async fn create_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipModel, DbErr> {
        entity::favorite_starship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Favorite characters of a user in creation order, each with the character and its homeworld
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteCharacterModel, Option<CharacterWithHomeworld>)>, DbErr> {
        let favorites = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await?;
        if favorites.is_empty() {
            return Ok(Vec::new());
        }

        let character_ids: Vec<i32> = favorites.iter().map(|f| f.character_id).collect();
        let characters: HashMap<i32, CharacterWithHomeworld> =
            entity::prelude::Character::find()
                .filter(entity::character::Column::Id.is_in(character_ids))
                .find_also_related(entity::prelude::Planet)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(character, planet)| (character.id, (character, planet)))
                .collect();

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let character = characters.get(&favorite.character_id).cloned();
                (favorite, character)
            })
            .collect())
    }

    /// Favorite planets of a user in creation order, each with the planet if it still exists
    pub async fn get_planets_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoritePlanetModel, Option<PlanetModel>)>, DbErr> {
        let favorites = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await?;
        if favorites.is_empty() {
            return Ok(Vec::new());
        }

        let planet_ids: Vec<i32> = favorites.iter().map(|f| f.planet_id).collect();
        let planets: HashMap<i32, PlanetModel> = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|planet| (planet.id, planet))
            .collect();

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let planet = planets.get(&favorite.planet_id).cloned();
                (favorite, planet)
            })
            .collect())
    }

    /// Favorite starships of a user in creation order, each with the starship if it still exists
    pub async fn get_starships_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteStarshipModel, Option<StarshipModel>)>, DbErr> {
        let favorites = entity::prelude::FavoriteStarship::find()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_starship::Column::Id)
            .all(self.db)
            .await?;
        if favorites.is_empty() {
            return Ok(Vec::new());
        }

        let starship_ids: Vec<i32> = favorites.iter().map(|f| f.starship_id).collect();
        let starships: HashMap<i32, StarshipModel> = entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.is_in(starship_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|starship| (starship.id, starship))
            .collect();

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let starship = starships.get(&favorite.starship_id).cloned();
                (favorite, starship)
            })
            .collect())
    }
}
