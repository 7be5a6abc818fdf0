use super::*;

/// Tests that new responsibilities are appended after existing ones.
///
/// Expected: Ok with sort_order one past the current maximum
#[tokio::test]
async fn appends_after_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::responsibility::ResponsibilityFactory::new(db, "1")
        .sort_order(4)
        .build()
        .await?;

    let repo = ResponsibilityRepository::new(db);
    let created = repo.create(1, "Events", "Runs community events").await?;

    assert_eq!(created.name, "Events");
    assert_eq!(created.sort_order, 5);
    assert!(created.responsibles.is_empty());
    assert!(created.role_ids.is_empty());

    Ok(())
}

/// Tests the first responsibility in a guild.
///
/// Expected: Ok with sort_order 0
#[tokio::test]
async fn first_responsibility_sorts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResponsibilityRepository::new(db);
    let created = repo.create(1, "Moderation", "Keeps chat civil").await?;

    assert_eq!(created.sort_order, 0);

    Ok(())
}
