use super::*;

fn sample_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Alice".to_string(),
        email: email.to_string(),
        password_hash: "$2b$12$stored-hash".to_string(),
        avatar_asset_id: "avatars/a1".to_string(),
        avatar_url: "https://images.example.test/avatars/a1.png".to_string(),
        theme_preference: "dark".to_string(),
        notification_viewed: false,
    }
}

/// Tests creating a user with all column values.
///
/// Verifies that the repository persists every profile field and that the
/// row is readable back through the entity.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(sample_params("a@x.com")).await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.theme_preference, "dark");
    assert!(!user.notification_viewed);

    // Verify the row exists in the database
    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().email, "a@x.com");

    Ok(())
}

/// Tests that the unique email index rejects duplicate registrations.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(sample_params("dup@x.com")).await?;

    let result = repo.create(sample_params("dup@x.com")).await;
    assert!(result.is_err());

    Ok(())
}
