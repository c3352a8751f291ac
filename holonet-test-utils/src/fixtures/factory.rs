//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for
//! serialization unit tests.

use crate::{
    constant::{
        TEST_CHARACTER_HEIGHT, TEST_CHARACTER_MASS, TEST_PLANET_CLIMATE, TEST_PLANET_NAME,
        TEST_PLANET_POPULATION, TEST_STARSHIP_MGLT, TEST_STARSHIP_MODEL, TEST_USER_LAST_NAME,
        TEST_USER_PASSWORD,
    },
    model::{CharacterModel, FilmModel, PlanetModel, StarshipModel, UserModel},
};

/// Create a mock user model with the given ID and email.
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        name: "Leia".to_string(),
        last_name: TEST_USER_LAST_NAME.to_string(),
        email: email.to_string(),
        password: TEST_USER_PASSWORD.to_string(),
        is_active: true,
    }
}

/// Create a mock planet model named after [`TEST_PLANET_NAME`].
pub fn mock_planet_model(id: i32) -> PlanetModel {
    PlanetModel {
        id,
        name: TEST_PLANET_NAME.to_string(),
        rotation_period: None,
        orbital_period: None,
        diameter: None,
        climate: Some(TEST_PLANET_CLIMATE.to_string()),
        gravity: None,
        terrain: None,
        surface_water: None,
        population: Some(TEST_PLANET_POPULATION.to_string()),
    }
}

/// Create a mock character model living on `homeworld_id`.
pub fn mock_character_model(id: i32, homeworld_id: i32) -> CharacterModel {
    CharacterModel {
        id,
        name: "Luke Skywalker".to_string(),
        height: Some(TEST_CHARACTER_HEIGHT.to_string()),
        mass: Some(TEST_CHARACTER_MASS.to_string()),
        hair_color: None,
        skin_color: None,
        eye_color: None,
        birth_year: None,
        gender: None,
        homeworld_id,
    }
}

pub fn mock_starship_model(id: i32) -> StarshipModel {
    StarshipModel {
        id,
        name: "X-wing".to_string(),
        model: Some(TEST_STARSHIP_MODEL.to_string()),
        manufacturer: None,
        cost_in_credits: None,
        length: None,
        max_atmosphering_speed: None,
        crew: None,
        passengers: None,
        cargo_capacity: None,
        consumables: None,
        hyperdrive_rating: None,
        mglt: Some(TEST_STARSHIP_MGLT.to_string()),
        starship_class: None,
    }
}

pub fn mock_film_model(id: i32) -> FilmModel {
    FilmModel {
        id,
        title: "A New Hope".to_string(),
    }
}
