use super::*;

/// Tests case-insensitive lookup by name.
///
/// Expected: Ok(Some) regardless of case, None in another guild
#[tokio::test]
async fn matches_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resp = factory::responsibility::ResponsibilityFactory::new(db, "1")
        .name("Events")
        .build()
        .await?;
    factory::create_responsibility_member(db, resp.id, "10").await?;
    factory::create_responsibility_role(db, resp.id, "100").await?;

    let repo = ResponsibilityRepository::new(db);
    let found = repo.find_by_name(1, "  eVeNtS ").await?.unwrap();

    assert_eq!(found.id, resp.id);
    assert_eq!(found.responsibles, vec![10]);
    assert_eq!(found.role_ids, vec![100]);
    assert!(repo.find_by_name(2, "events").await?.is_none());

    Ok(())
}
