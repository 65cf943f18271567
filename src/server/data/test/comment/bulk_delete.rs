use super::*;

/// Tests the per-place bulk delete used by the place cascade.
///
/// Expected: only the place's comments are removed
#[tokio::test]
async fn deletes_by_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, place) = factory::helpers::create_place_with_creator(db).await?;
    let bob = factory::user::create_user(db).await?;
    let other_place = factory::place::create_place(db, bob.id).await?;

    factory::comment::create_comment(db, place.id, alice.id).await?;
    factory::comment::create_comment(db, place.id, bob.id).await?;
    let survivor = factory::comment::create_comment(db, other_place.id, bob.id).await?;

    let repo = CommentRepository::new(db);
    let removed = repo.delete_by_place(place.id).await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::Comment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests the combined delete used by the profile cascade.
///
/// Removes comments the user authored anywhere plus every comment on the
/// user's own places, while unrelated comments survive.
///
/// Expected: three comments removed, one survivor
#[tokio::test]
async fn deletes_by_creator_or_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, alices_place) = factory::helpers::create_place_with_creator(db).await?;
    let (bob, bobs_place) = factory::helpers::create_place_with_creator(db).await?;

    // Alice's comment on Bob's place: removed (authored by Alice)
    factory::comment::create_comment(db, bobs_place.id, alice.id).await?;
    // Bob's comment on Alice's place: removed (on an owned place)
    factory::comment::create_comment(db, alices_place.id, bob.id).await?;
    // Alice's comment on her own place: removed (both rules apply)
    factory::comment::create_comment(db, alices_place.id, alice.id).await?;
    // Bob's comment on his own place: survives
    let survivor = factory::comment::create_comment(db, bobs_place.id, bob.id).await?;

    let repo = CommentRepository::new(db);
    let removed = repo
        .delete_by_creator_or_places(alice.id, &[alices_place.id])
        .await?;

    assert_eq!(removed, 3);
    let remaining = entity::prelude::Comment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests the combined delete with no owned places.
///
/// Expected: only the authored comments are removed
#[tokio::test]
async fn deletes_by_creator_alone_when_no_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (bob, bobs_place) = factory::helpers::create_place_with_creator(db).await?;
    let alice = factory::user::create_user(db).await?;

    factory::comment::create_comment(db, bobs_place.id, alice.id).await?;
    let survivor = factory::comment::create_comment(db, bobs_place.id, bob.id).await?;

    let repo = CommentRepository::new(db);
    let removed = repo.delete_by_creator_or_places(alice.id, &[]).await?;

    assert_eq!(removed, 1);
    let remaining = entity::prelude::Comment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}
