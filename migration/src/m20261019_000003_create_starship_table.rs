use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_len(Starship::Name, 100))
                    .col(string_len_null(Starship::Model, 100))
                    .col(string_len_null(Starship::Manufacturer, 200))
                    .col(string_len_null(Starship::CostInCredits, 50))
                    .col(string_len_null(Starship::Length, 50))
                    .col(string_len_null(Starship::MaxAtmospheringSpeed, 50))
                    .col(string_len_null(Starship::Crew, 50))
                    .col(string_len_null(Starship::Passengers, 50))
                    .col(string_len_null(Starship::CargoCapacity, 50))
                    .col(string_len_null(Starship::Consumables, 50))
                    .col(string_len_null(Starship::HyperdriveRating, 20))
                    .col(string_len_null(Starship::Mglt, 20))
                    .col(string_len_null(Starship::StarshipClass, 50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    HyperdriveRating,
    #[sea_orm(iden = "MGLT")]
    Mglt,
    StarshipClass,
}
