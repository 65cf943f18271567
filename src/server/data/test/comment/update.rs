use super::*;

/// Tests that an edit replaces text and post date unconditionally.
///
/// Expected: both columns replaced, references untouched
#[tokio::test]
async fn replaces_text_and_post_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _place, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let original = comment.clone();
    let new_date = Utc::now() + chrono::Duration::minutes(5);

    let repo = CommentRepository::new(db);
    let updated = repo
        .update(
            comment,
            UpdateCommentParams {
                text: "Edited".to_string(),
                post_date: new_date,
            },
        )
        .await?;

    assert_eq!(updated.text, "Edited");
    assert_eq!(updated.post_date, new_date);
    assert_eq!(updated.place_id, original.place_id);
    assert_eq!(updated.creator_id, original.creator_id);

    Ok(())
}
