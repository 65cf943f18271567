use super::*;

/// Tests that an empty patch leaves the profile untouched.
///
/// Expected: the stored row equals the original; no host calls
#[tokio::test]
async fn empty_patch_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let user = factory::user::create_user(db).await?;
    let original = user.clone();

    let updated = UserService::new(db)
        .update_profile(&auth, &images, user.id, UpdateProfileParams::default())
        .await?;

    assert_eq!(updated, original);
    assert!(images_stub.uploaded_assets().is_empty());
    assert!(images_stub.deleted_assets().is_empty());

    Ok(())
}

/// Tests the password change flow.
///
/// A wrong current password is rejected before anything is written; the
/// correct one swaps the stored hash for one verifying the new password.
///
/// Expected: 401-mapped error first, then a working new hash
#[tokio::test]
async fn password_change_requires_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let old_hash = auth.hash_password("old-password")?;
    let user = factory::user::UserFactory::new(db)
        .password_hash(old_hash)
        .build()
        .await?;

    let service = UserService::new(db);

    let rejected = service
        .update_profile(
            &auth,
            &images,
            user.id,
            UpdateProfileParams {
                password: Some(PasswordChange {
                    current: "not-the-old-password".to_string(),
                    new: "new-password".to_string(),
                }),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        rejected,
        Err(AppError::AuthErr(AuthError::WrongPassword))
    ));

    let updated = service
        .update_profile(
            &auth,
            &images,
            user.id,
            UpdateProfileParams {
                password: Some(PasswordChange {
                    current: "old-password".to_string(),
                    new: "new-password".to_string(),
                }),
                ..Default::default()
            },
        )
        .await?;

    assert!(auth.verify_password("new-password", &updated.password_hash)?);
    assert!(!auth.verify_password("old-password", &updated.password_hash)?);

    Ok(())
}

/// Tests the explicit avatar removal state.
///
/// Expected: prior asset destroyed, placeholder id, empty URL
#[tokio::test]
async fn avatar_remove_deletes_asset_and_sets_placeholder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let user = factory::user::create_user(db).await?;
    let old_asset = user.avatar_asset_id.clone();

    let updated = UserService::new(db)
        .update_profile(
            &auth,
            &images,
            user.id,
            UpdateProfileParams {
                avatar: Patch::Remove,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(images_stub.deleted_assets(), vec![old_asset]);
    assert!(updated.avatar_asset_id.starts_with("avatars/placeholder_"));
    assert!(updated.avatar_url.is_empty());

    Ok(())
}

/// Tests the avatar replacement state.
///
/// Expected: prior asset destroyed, new asset stored
#[tokio::test]
async fn avatar_replace_swaps_assets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let user = factory::user::create_user(db).await?;
    let old_asset = user.avatar_asset_id.clone();

    let updated = UserService::new(db)
        .update_profile(
            &auth,
            &images,
            user.id,
            UpdateProfileParams {
                avatar: Patch::Set("data:image/png;base64,BBBB".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(images_stub.deleted_assets(), vec![old_asset]);
    assert_eq!(images_stub.uploaded_assets().len(), 1);
    assert_eq!(updated.avatar_asset_id, images_stub.uploaded_assets()[0]);

    Ok(())
}
