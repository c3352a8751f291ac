use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys: favorites are recorded for whichever ids are requested
        // and the user repository removes a user's favorites alongside the user.
        let favorites = [
            (
                FavoriteCharacter::Table.into_iden(),
                FavoriteCharacter::CharacterId.into_iden(),
                "idx_favorite_character_user_id",
            ),
            (
                FavoritePlanet::Table.into_iden(),
                FavoritePlanet::PlanetId.into_iden(),
                "idx_favorite_planet_user_id",
            ),
            (
                FavoriteStarship::Table.into_iden(),
                FavoriteStarship::StarshipId.into_iden(),
                "idx_favorite_starship_user_id",
            ),
        ];

        for (table, target_id, user_index) in favorites {
            manager
                .create_table(
                    Table::create()
                        .table(table.clone())
                        .if_not_exists()
                        .col(pk_auto(Favorite::Id))
                        .col(integer(Favorite::UserId))
                        .col(integer(target_id))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name(user_index)
                        .table(table)
                        .col(Favorite::UserId)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            FavoriteCharacter::Table.into_iden(),
            FavoritePlanet::Table.into_iden(),
            FavoriteStarship::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

/// Columns shared by every favorite table
#[derive(DeriveIden)]
enum Favorite {
    Id,
    UserId,
}

#[derive(DeriveIden)]
enum FavoriteCharacter {
    Table,
    CharacterId,
}

#[derive(DeriveIden)]
enum FavoritePlanet {
    Table,
    PlanetId,
}

#[derive(DeriveIden)]
enum FavoriteStarship {
    Table,
    StarshipId,
}
