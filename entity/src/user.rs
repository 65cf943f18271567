use sea_orm::entity::prelude::*;

/// Registered account with profile settings.
///
/// The password is stored as a single bcrypt hash. Avatar fields hold the
/// asset id and URL returned by the image host; accounts without an uploaded
/// avatar carry a locally generated placeholder id and an empty URL.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub avatar_asset_id: String,
    pub avatar_url: String,
    pub theme_preference: String,
    pub notification_viewed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::place::Entity")]
    Place,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::place_favorite::Entity")]
    PlaceFavorite,
}

impl Related<super::place::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Place.def()
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
