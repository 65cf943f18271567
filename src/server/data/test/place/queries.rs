use super::*;

/// Tests listing the places owned by a user.
///
/// Expected: only the owner's places are returned
#[tokio::test]
async fn gets_places_by_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let p1 = factory::place::create_place(db, alice.id).await?;
    let p2 = factory::place::create_place(db, alice.id).await?;
    factory::place::create_place(db, bob.id).await?;

    let repo = PlaceRepository::new(db);
    let places = repo.get_by_creator(alice.id).await?;

    let mut ids: Vec<i32> = places.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![p1.id, p2.id]);

    Ok(())
}

/// Tests that a user without places yields an empty list, not an error.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn empty_list_for_user_without_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PlaceRepository::new(db);
    let places = repo.get_by_creator(user.id).await?;

    assert!(places.is_empty());

    Ok(())
}

/// Tests expanding a place with its creator.
///
/// Expected: the creator row rides along with the place
#[tokio::test]
async fn finds_place_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, place) = factory::helpers::create_place_with_creator(db).await?;

    let repo = PlaceRepository::new(db);
    let found = repo.find_by_id_with_creator(place.id).await?;

    let (found_place, creator) = found.expect("place should exist");
    assert_eq!(found_place.id, place.id);
    assert_eq!(creator.map(|c| c.id), Some(user.id));

    Ok(())
}

/// Tests the id-list expansion used by the favorites listing.
///
/// An empty id list returns early without touching the database.
///
/// Expected: matching places with creators; empty input gives empty output
#[tokio::test]
async fn gets_places_by_ids_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, place) = factory::helpers::create_place_with_creator(db).await?;
    factory::place::create_place(db, user.id).await?;

    let repo = PlaceRepository::new(db);

    let found = repo.get_by_ids_with_creator(&[place.id]).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.id, place.id);

    let empty = repo.get_by_ids_with_creator(&[]).await?;
    assert!(empty.is_empty());

    Ok(())
}
