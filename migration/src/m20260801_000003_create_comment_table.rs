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
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(text(Comment::Text))
                    .col(timestamp_with_time_zone(Comment::PostDate))
                    .col(integer(Comment::PlaceId))
                    .col(integer(Comment::CreatorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_place_id")
                            .from(Comment::Table, Comment::PlaceId)
                            .to(Place::Table, Place::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_creator_id")
                            .from(Comment::Table, Comment::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Comment {
    Table,
    Id,
    Text,
    PostDate,
    PlaceId,
    CreatorId,
}
