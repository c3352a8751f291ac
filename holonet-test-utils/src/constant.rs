//! Standard values used by mock fixtures.
//!
//! Fixture helpers fill every descriptive column with these values so tests can
//! compare serialized output against known data.

/// Name given to mock planets unless one is provided.
pub static TEST_PLANET_NAME: &str = "Tatooine";

/// Climate stored on every mock planet.
pub static TEST_PLANET_CLIMATE: &str = "arid";

/// Population stored on every mock planet.
pub static TEST_PLANET_POPULATION: &str = "200000";

/// Height stored on every mock character.
pub static TEST_CHARACTER_HEIGHT: &str = "172";

/// Mass stored on every mock character.
pub static TEST_CHARACTER_MASS: &str = "77";

/// Model stored on every mock starship.
pub static TEST_STARSHIP_MODEL: &str = "T-65 X-wing";

/// Megalights per hour stored on every mock starship.
pub static TEST_STARSHIP_MGLT: &str = "100";

/// Last name given to mock users.
pub static TEST_USER_LAST_NAME: &str = "Organa";

/// Plaintext password given to mock users.
pub static TEST_USER_PASSWORD: &str = "alderaan";
