use super::*;

/// Tests the insert/exists/remove round trip behind the favorite toggle.
///
/// Expected: membership flips with each operation
#[tokio::test]
async fn insert_exists_remove_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, place) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(!repo.exists(place.id, fan.id).await?);

    repo.insert(place.id, fan.id).await?;
    assert!(repo.exists(place.id, fan.id).await?);

    repo.remove(place.id, fan.id).await?;
    assert!(!repo.exists(place.id, fan.id).await?);

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate marker.
///
/// Expected: Err on the second insert of the same pair
#[tokio::test]
async fn rejects_duplicate_marker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, place) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.insert(place.id, fan.id).await?;

    let result = repo.insert(place.id, fan.id).await;
    assert!(result.is_err());

    Ok(())
}
