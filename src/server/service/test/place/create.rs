use super::*;

/// Tests the full creation path: geocode, upload, creator check, insert.
///
/// Expected: the place carries the stub's coordinates and the uploaded asset,
/// starts with a zero share count, and resolves back to its creator
#[tokio::test]
async fn creates_place_with_geocoded_location_and_uploaded_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let geocoder_stub = stub::geocoder::spawn(40.7484, -73.9857).await;
    let images_stub = stub::image_host::spawn().await;
    let geocoder = geocoder_client(&geocoder_stub);
    let images = image_client(&images_stub);

    let alice = factory::user::UserFactory::new(db)
        .name("Alice")
        .email("a@x.com")
        .build()
        .await?;

    let service = PlaceService::new(db);
    let place = service
        .create(
            &geocoder,
            &images,
            CreatePlaceParams {
                title: "Infinite Loop".to_string(),
                description: "The mothership.".to_string(),
                address: "1 Infinite Loop".to_string(),
                post_date: Utc::now(),
                creator_id: alice.id,
                image: "data:image/jpeg;base64,AAAA".to_string(),
            },
        )
        .await?;

    assert_eq!(place.lat, 40.7484);
    assert_eq!(place.lng, -73.9857);
    assert_eq!(place.share_count, 0);
    assert_eq!(place.creator_id, alice.id);
    assert!(place.image_asset_id.starts_with("places/"));
    assert!(!place.image_url.is_empty());

    assert_eq!(images_stub.uploaded_assets().len(), 1);

    // The new place shows up in the creator's owned places
    let owned = PlaceRepository::new(db).get_by_creator(alice.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, place.id);

    Ok(())
}

/// Tests that an unresolvable address fails the whole operation.
///
/// The image host must never be called: the geocoder runs first, and its
/// failure stops the procedure before any upload.
///
/// Expected: the geocoding error, no upload, no row
#[tokio::test]
async fn unresolvable_address_fails_before_upload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let geocoder_stub = stub::geocoder::spawn_zero_results().await;
    let images_stub = stub::image_host::spawn().await;
    let geocoder = geocoder_client(&geocoder_stub);
    let images = image_client(&images_stub);

    let alice = factory::user::create_user(db).await?;

    let service = PlaceService::new(db);
    let result = service
        .create(
            &geocoder,
            &images,
            CreatePlaceParams {
                title: "Nowhere".to_string(),
                description: "No such street.".to_string(),
                address: "1 Nonexistent Way".to_string(),
                post_date: Utc::now(),
                creator_id: alice.id,
                image: "data:image/jpeg;base64,AAAA".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamErr(UpstreamError::NoGeocodingResult(_)))
    ));
    assert!(images_stub.uploaded_assets().is_empty());
    assert!(entity::prelude::Place::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests creation against a missing creator.
///
/// Expected: 404-mapped not-found error and no place row
#[tokio::test]
async fn missing_creator_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let geocoder_stub = stub::geocoder::spawn(1.0, 2.0).await;
    let images_stub = stub::image_host::spawn().await;
    let geocoder = geocoder_client(&geocoder_stub);
    let images = image_client(&images_stub);

    let service = PlaceService::new(db);
    let result = service
        .create(
            &geocoder,
            &images,
            CreatePlaceParams {
                title: "Orphan".to_string(),
                description: "Nobody owns this.".to_string(),
                address: "1 Example Street".to_string(),
                post_date: Utc::now(),
                creator_id: 999,
                image: "data:image/jpeg;base64,AAAA".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(entity::prelude::Place::find().all(db).await?.is_empty());

    Ok(())
}
