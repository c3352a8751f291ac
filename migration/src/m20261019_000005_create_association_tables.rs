use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_create_planet_table::Planet,
    m20261019_000002_create_character_table::Character,
    m20261019_000003_create_starship_table::Starship, m20261019_000004_create_film_table::Film,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tables = [
            association_table(
                CharacterFilm::Table,
                (CharacterFilm::CharacterId, Character::Table, Character::Id),
                (CharacterFilm::FilmId, Film::Table, Film::Id),
            ),
            association_table(
                PlanetFilm::Table,
                (PlanetFilm::PlanetId, Planet::Table, Planet::Id),
                (PlanetFilm::FilmId, Film::Table, Film::Id),
            ),
            association_table(
                StarshipFilm::Table,
                (StarshipFilm::StarshipId, Starship::Table, Starship::Id),
                (StarshipFilm::FilmId, Film::Table, Film::Id),
            ),
            association_table(
                CharacterStarship::Table,
                (
                    CharacterStarship::CharacterId,
                    Character::Table,
                    Character::Id,
                ),
                (
                    CharacterStarship::StarshipId,
                    Starship::Table,
                    Starship::Id,
                ),
            ),
        ];

        for table in tables {
            manager.create_table(table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            CharacterFilm::Table.into_iden(),
            PlanetFilm::Table.into_iden(),
            StarshipFilm::Table.into_iden(),
            CharacterStarship::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

/// Builds a join table holding only the two foreign keys, which together form the primary key.
///
/// Rows are removed when either side is deleted.
fn association_table<T, L, LT, LC, R, RT, RC>(
    table: T,
    (left, left_table, left_id): (L, LT, LC),
    (right, right_table, right_id): (R, RT, RC),
) -> TableCreateStatement
where
    T: IntoIden + Copy,
    L: IntoIden + Copy,
    LT: IntoIden,
    LC: IntoIden,
    R: IntoIden + Copy,
    RT: IntoIden,
    RC: IntoIden,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(integer(left))
        .col(integer(right))
        .primary_key(Index::create().col(left).col(right))
        .foreign_key(
            ForeignKey::create()
                .from(table, left)
                .to(left_table, left_id)
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(table, right)
                .to(right_table, right_id)
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
pub enum CharacterFilm {
    Table,
    CharacterId,
    FilmId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum PlanetFilm {
    Table,
    PlanetId,
    FilmId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum StarshipFilm {
    Table,
    StarshipId,
    FilmId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum CharacterStarship {
    Table,
    CharacterId,
    StarshipId,
}
