use super::*;

/// Tests that only provided fields are written during a profile update.
///
/// Expected: name replaced, every other column untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let original = user.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateUserFields {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, original.email);
    assert_eq!(updated.password_hash, original.password_hash);
    assert_eq!(updated.avatar_asset_id, original.avatar_asset_id);
    assert_eq!(updated.theme_preference, original.theme_preference);

    Ok(())
}

/// Tests that an all-empty update leaves the row byte-identical.
///
/// Expected: the stored row equals the original
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let original = user.clone();

    let repo = UserRepository::new(db);
    let updated = repo.update_profile(user, UpdateUserFields::default()).await?;

    assert_eq!(updated, original);

    Ok(())
}

/// Tests that an avatar update replaces both asset columns together.
///
/// Expected: asset id and URL both replaced
#[tokio::test]
async fn avatar_update_replaces_both_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateUserFields {
                avatar: Some(StoredImage {
                    asset_id: "avatars/new".to_string(),
                    url: "https://images.example.test/avatars/new.png".to_string(),
                }),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.avatar_asset_id, "avatars/new");
    assert_eq!(updated.avatar_url, "https://images.example.test/avatars/new.png");

    Ok(())
}
