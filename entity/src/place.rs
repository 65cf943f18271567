use sea_orm::entity::prelude::*;

/// User-submitted location record.
///
/// Coordinates are resolved from the address through the geocoding client at
/// creation and whenever the address changes. There is no `ON DELETE CASCADE`
/// behind `creator_id`; removal is handled by the explicit cascade in the
/// service layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "place")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub image_asset_id: String,
    pub image_url: String,
    pub post_date: DateTimeUtc,
    pub share_count: i32,
    pub creator_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::place_favorite::Entity")]
    PlaceFavorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::place_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaceFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
