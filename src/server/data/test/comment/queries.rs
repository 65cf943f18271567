use super::*;

/// Tests listing a place's comments with authors expanded.
///
/// Expected: only comments on the requested place, each with its author
#[tokio::test]
async fn gets_comments_by_place_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, place) = factory::helpers::create_place_with_creator(db).await?;
    let bob = factory::user::create_user(db).await?;
    let other_place = factory::place::create_place(db, bob.id).await?;

    let c1 = factory::comment::create_comment(db, place.id, alice.id).await?;
    let c2 = factory::comment::create_comment(db, place.id, bob.id).await?;
    factory::comment::create_comment(db, other_place.id, bob.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_place_with_authors(place.id).await?;

    assert_eq!(comments.len(), 2);
    let mut ids: Vec<i32> = comments.iter().map(|(c, _)| c.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![c1.id, c2.id]);
    for (comment, author) in &comments {
        assert_eq!(author.as_ref().map(|a| a.id), Some(comment.creator_id));
    }

    Ok(())
}

/// Tests the full comment listing used by the feed.
///
/// Expected: every comment with its author
#[tokio::test]
async fn gets_all_comments_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _place, _comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let (_user2, _place2, _comment2) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_all_with_authors().await?;

    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|(_, author)| author.is_some()));

    Ok(())
}
