use super::*;

/// Tests scrubbing every marker on one place.
///
/// Expected: the place's markers are gone, other places keep theirs
#[tokio::test]
async fn deletes_by_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_o1, p1) = factory::helpers::create_place_with_creator(db).await?;
    let (_o2, p2) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.insert(p1.id, fan.id).await?;
    repo.insert(p2.id, fan.id).await?;

    let removed = repo.delete_by_place(p1.id).await?;
    assert_eq!(removed, 1);

    assert!(!repo.exists(p1.id, fan.id).await?);
    assert!(repo.exists(p2.id, fan.id).await?);

    Ok(())
}

/// Tests scrubbing every marker placed by one user.
///
/// Expected: the user's markers are gone, other users keep theirs
#[tokio::test]
async fn deletes_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, place) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;
    let other_fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.insert(place.id, fan.id).await?;
    repo.insert(place.id, other_fan.id).await?;

    let removed = repo.delete_by_user(fan.id).await?;
    assert_eq!(removed, 1);

    assert!(!repo.exists(place.id, fan.id).await?);
    assert!(repo.exists(place.id, other_fan.id).await?);

    Ok(())
}

/// Tests scrubbing markers across a set of places at once.
///
/// Expected: markers on listed places removed; empty input is a no-op
#[tokio::test]
async fn deletes_by_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_o1, p1) = factory::helpers::create_place_with_creator(db).await?;
    let (_o2, p2) = factory::helpers::create_place_with_creator(db).await?;
    let (_o3, p3) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.insert(p1.id, fan.id).await?;
    repo.insert(p2.id, fan.id).await?;
    repo.insert(p3.id, fan.id).await?;

    assert_eq!(repo.delete_by_places(&[]).await?, 0);

    let removed = repo.delete_by_places(&[p1.id, p2.id]).await?;
    assert_eq!(removed, 2);

    assert_eq!(repo.place_ids_for_user(fan.id).await?, vec![p3.id]);

    Ok(())
}
