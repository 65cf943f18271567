use super::*;

/// Tests the favorite toggle round trip.
///
/// The first toggle adds the marker and reports membership; the second
/// removes it and restores the original state. Both sides of the relation
/// stay consistent after each step.
///
/// Expected: true then false, with matching relation rows
#[tokio::test]
async fn double_toggle_restores_original_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, place) = factory::helpers::create_place_with_creator(db).await?;
    let fan = factory::user::create_user(db).await?;

    let service = PlaceService::new(db);
    let favorites = FavoriteRepository::new(db);

    let first = service.toggle_favorite(place.id, fan.id).await?;
    assert!(first);
    assert_eq!(favorites.user_ids_for_place(place.id).await?, vec![fan.id]);
    assert_eq!(favorites.place_ids_for_user(fan.id).await?, vec![place.id]);

    let second = service.toggle_favorite(place.id, fan.id).await?;
    assert!(!second);
    assert!(favorites.user_ids_for_place(place.id).await?.is_empty());
    assert!(favorites.place_ids_for_user(fan.id).await?.is_empty());

    Ok(())
}

/// Tests toggling against a missing place.
///
/// Expected: not-found error
#[tokio::test]
async fn missing_place_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = factory::user::create_user(db).await?;

    let result = PlaceService::new(db).toggle_favorite(999, fan.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests toggling with a missing user.
///
/// Expected: not-found error and no marker row
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, place) = factory::helpers::create_place_with_creator(db).await?;

    let result = PlaceService::new(db).toggle_favorite(place.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(FavoriteRepository::new(db)
        .user_ids_for_place(place.id)
        .await?
        .is_empty());

    Ok(())
}
