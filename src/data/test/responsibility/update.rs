use super::*;

/// Tests editing individual fields.
///
/// Expected: Ok with each change applied
#[tokio::test]
async fn applies_each_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resp = factory::create_responsibility(db, "1").await?;

    let repo = ResponsibilityRepository::new(db);
    repo.update(resp.id, ResponsibilityUpdate::Description("New text".to_string()))
        .await?;
    repo.update(resp.id, ResponsibilityUpdate::SortOrder(9))
        .await?;
    repo.update(
        resp.id,
        ResponsibilityUpdate::ImageUrl(Some("https://example.com/a.png".to_string())),
    )
    .await?;
    let updated = repo
        .update(resp.id, ResponsibilityUpdate::MentionShortcut(None))
        .await?
        .unwrap();

    assert_eq!(updated.description, "New text");
    assert_eq!(updated.sort_order, 9);
    assert_eq!(updated.image_url.as_deref(), Some("https://example.com/a.png"));
    assert!(updated.mention_shortcut.is_none());

    Ok(())
}

/// Tests editing a missing responsibility.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResponsibilityRepository::new(db);
    let result = repo
        .update(42, ResponsibilityUpdate::SortOrder(1))
        .await?;

    assert!(result.is_none());

    Ok(())
}
