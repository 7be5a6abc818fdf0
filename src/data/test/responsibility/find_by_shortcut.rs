use super::*;

/// Tests finding a responsibility by its mention shortcut.
///
/// Expected: Ok(Some) for the configured word, None for others
#[tokio::test]
async fn finds_configured_shortcut() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_responsibility(db, "1").await?;
    let resp = factory::responsibility::ResponsibilityFactory::new(db, "1")
        .mention_shortcut(Some("!events".to_string()))
        .build()
        .await?;

    let repo = ResponsibilityRepository::new(db);

    assert_eq!(
        repo.find_by_shortcut(1, "!EVENTS").await?.map(|r| r.id),
        Some(resp.id)
    );
    assert!(repo.find_by_shortcut(1, "!mods").await?.is_none());

    Ok(())
}
