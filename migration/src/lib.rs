pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_planet_table;
mod m20261019_000002_create_character_table;
mod m20261019_000003_create_starship_table;
mod m20261019_000004_create_film_table;
mod m20261019_000005_create_association_tables;
mod m20261019_000006_create_user_table;
mod m20261019_000007_create_favorite_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_planet_table::Migration),
            Box::new(m20261019_000002_create_character_table::Migration),
            Box::new(m20261019_000003_create_starship_table::Migration),
            Box::new(m20261019_000004_create_film_table::Migration),
            Box::new(m20261019_000005_create_association_tables::Migration),
            Box::new(m20261019_000006_create_user_table::Migration),
            Box::new(m20261019_000007_create_favorite_tables::Migration),
        ]
    }
}
