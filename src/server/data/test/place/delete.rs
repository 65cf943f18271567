use super::*;

/// Tests deleting a place without dependents.
///
/// Expected: Ok and the row is gone
#[tokio::test]
async fn deletes_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, place) = factory::helpers::create_place_with_creator(db).await?;

    let repo = PlaceRepository::new(db);
    repo.delete(place.id).await?;

    let stored = entity::prelude::Place::find_by_id(place.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that deleting a place with remaining comments is restricted.
///
/// The foreign key has no cascade; the comment rows must go first, which is
/// exactly the ordering the service-level cascade enforces.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn restricts_delete_while_comments_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, place, _comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = PlaceRepository::new(db);
    let result = repo.delete(place.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the bulk delete used by the profile cascade.
///
/// Expected: only the listed places are removed; an empty list is a no-op
#[tokio::test]
async fn deletes_many_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let p1 = factory::place::create_place(db, user.id).await?;
    let p2 = factory::place::create_place(db, user.id).await?;
    let keep = factory::place::create_place(db, user.id).await?;

    let repo = PlaceRepository::new(db);

    assert_eq!(repo.delete_many(&[]).await?, 0);

    let removed = repo.delete_many(&[p1.id, p2.id]).await?;
    assert_eq!(removed, 2);

    let remaining = repo.get_by_creator(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}
