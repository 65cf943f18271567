use super::*;

/// Tests deleting a user row.
///
/// Expected: Ok and the row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that deleting a user who still owns places is restricted.
///
/// The foreign key has no cascade; the place rows must be removed first by
/// the profile cascade.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn restricts_delete_while_places_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _place) = factory::helpers::create_place_with_creator(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.delete(user.id).await;

    assert!(result.is_err());

    Ok(())
}
