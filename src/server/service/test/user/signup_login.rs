use super::*;

/// Tests the signup/login round trip.
///
/// The registered password logs in and yields a token the auth layer
/// accepts; the stored hash never equals the raw password.
///
/// Expected: login succeeds and the token claims carry the user
#[tokio::test]
async fn signup_then_login_round_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let service = UserService::new(db);
    let (user, signup_token) = service
        .signup(&auth, &images, signup_params("a@x.com"))
        .await?;

    assert_ne!(user.password_hash, "hunter22");
    assert_eq!(auth.verify_token(&signup_token)?.user_id, user.id);

    let (logged_in, login_token) = service
        .login(
            &auth,
            LoginParams {
                email: "a@x.com".to_string(),
                password: "hunter22".to_string(),
            },
        )
        .await?;

    assert_eq!(logged_in.id, user.id);
    let claims = auth.verify_token(&login_token)?;
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.email, "a@x.com");

    Ok(())
}

/// Tests that signup without an image skips the host entirely.
///
/// Expected: placeholder asset id, empty URL, zero uploads
#[tokio::test]
async fn signup_without_image_uses_placeholder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let (user, _token) = UserService::new(db)
        .signup(&auth, &images, signup_params("b@x.com"))
        .await?;

    assert!(user.avatar_asset_id.starts_with("avatars/placeholder_"));
    assert!(user.avatar_url.is_empty());
    assert!(images_stub.uploaded_assets().is_empty());

    Ok(())
}

/// Tests that signup with an image uploads the avatar.
///
/// Expected: hosted asset id and URL on the account
#[tokio::test]
async fn signup_with_image_uploads_avatar() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let mut params = signup_params("c@x.com");
    params.image = Some("data:image/png;base64,AAAA".to_string());

    let (user, _token) = UserService::new(db).signup(&auth, &images, params).await?;

    assert_eq!(images_stub.uploaded_assets().len(), 1);
    assert_eq!(user.avatar_asset_id, images_stub.uploaded_assets()[0]);
    assert!(!user.avatar_url.is_empty());

    Ok(())
}

/// Tests that a second signup under the same email is rejected.
///
/// Expected: validation error
#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let service = UserService::new(db);
    service
        .signup(&auth, &images, signup_params("dup@x.com"))
        .await?;

    let result = service
        .signup(&auth, &images, signup_params("dup@x.com"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a wrong password and an unknown email are indistinguishable.
///
/// Both must map to the same invalid-credentials error so the response
/// carries no account enumeration signal.
///
/// Expected: identical error variants
#[tokio::test]
async fn login_failures_carry_no_enumeration_signal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let images_stub = stub::image_host::spawn().await;
    let images = image_client(&images_stub);
    let auth = AuthService::new("secret");

    let service = UserService::new(db);
    service
        .signup(&auth, &images, signup_params("known@x.com"))
        .await?;

    let wrong_password = service
        .login(
            &auth,
            LoginParams {
                email: "known@x.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await;
    let unknown_email = service
        .login(
            &auth,
            LoginParams {
                email: "unknown@x.com".to_string(),
                password: "hunter22".to_string(),
            },
        )
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
