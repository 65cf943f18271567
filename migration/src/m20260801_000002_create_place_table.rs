use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Place::Table)
                    .if_not_exists()
                    .col(pk_auto(Place::Id))
                    .col(string(Place::Title))
                    .col(text(Place::Description))
                    .col(string(Place::Address))
                    .col(double(Place::Lat))
                    .col(double(Place::Lng))
                    .col(string(Place::ImageAssetId))
                    .col(string(Place::ImageUrl))
                    .col(timestamp_with_time_zone(Place::PostDate))
                    .col(integer(Place::ShareCount))
                    .col(integer(Place::CreatorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_place_creator_id")
                            .from(Place::Table, Place::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Place::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Place {
    Table,
    Id,
    Title,
    Description,
    Address,
    Lat,
    Lng,
    ImageAssetId,
    ImageUrl,
    PostDate,
    ShareCount,
    CreatorId,
}
