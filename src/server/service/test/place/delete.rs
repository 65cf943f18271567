use super::*;

/// Tests the full place cascade.
///
/// A favorited, commented place is deleted: its favorite markers and
/// comments disappear, its image asset is destroyed on the host, and
/// unrelated content survives.
///
/// Expected: place, comments, and markers gone; asset destroyed
#[tokio::test]
async fn cascade_removes_references_and_asset() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);

    let (alice, place) = factory::helpers::create_place_with_creator(db).await?;
    let (bob, bobs_place) = factory::helpers::create_place_with_creator(db).await?;

    factory::place_favorite::create_favorite(db, place.id, bob.id).await?;
    factory::comment::create_comment(db, place.id, alice.id).await?;
    factory::comment::create_comment(db, place.id, bob.id).await?;
    let surviving_comment = factory::comment::create_comment(db, bobs_place.id, alice.id).await?;

    PlaceService::new(db).delete(&images, place.id).await?;

    // Place row and its references are gone
    assert!(PlaceRepository::new(db).find_by_id(place.id).await?.is_none());
    assert!(FavoriteRepository::new(db)
        .place_ids_for_user(bob.id)
        .await?
        .is_empty());
    assert!(CommentRepository::new(db)
        .get_by_place_with_authors(place.id)
        .await?
        .is_empty());

    // The image asset was destroyed on the host
    assert_eq!(images_stub.deleted_assets(), vec![place.image_asset_id]);

    // Unrelated content survives
    assert!(PlaceRepository::new(db)
        .find_by_id(bobs_place.id)
        .await?
        .is_some());
    assert!(CommentRepository::new(db)
        .find_by_id(surviving_comment.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a missing place.
///
/// Expected: not-found error and no destroy call
#[tokio::test]
async fn missing_place_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);

    let result = PlaceService::new(db).delete(&images, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(images_stub.deleted_assets().is_empty());

    Ok(())
}
