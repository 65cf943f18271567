use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;
use super::m20260801_000002_create_place_table::Place;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaceFavorite::Table)
                    .if_not_exists()
                    .col(integer(PlaceFavorite::PlaceId))
                    .col(integer(PlaceFavorite::UserId))
                    .primary_key(
                        Index::create()
                            .col(PlaceFavorite::PlaceId)
                            .col(PlaceFavorite::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_favorite_place_id")
                            .from(PlaceFavorite::Table, PlaceFavorite::PlaceId)
                            .to(Place::Table, Place::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_favorite_user_id")
                            .from(PlaceFavorite::Table, PlaceFavorite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlaceFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum PlaceFavorite {
    Table,
    PlaceId,
    UserId,
}
