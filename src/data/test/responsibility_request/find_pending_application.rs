use super::*;

/// Tests finding a member's pending application.
///
/// Verifies that decided applications and other responsibilities are ignored.
///
/// Expected: Ok(Some) only for the pending application
#[tokio::test]
async fn finds_only_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_responsibility(db, "1").await?;
    let second = factory::create_responsibility(db, "1").await?;
    let pending = factory::create_apply_request(db, "1", first.id, "10").await?;
    let decided = factory::create_apply_request(db, "1", second.id, "10").await?;

    let repo = ResponsibilityRequestRepository::new(db);
    repo.decide(decided.id, RequestStatus::Rejected, 99).await?;

    assert_eq!(
        repo.find_pending_application(first.id, 10).await?.map(|r| r.id),
        Some(pending.id)
    );
    assert!(repo.find_pending_application(second.id, 10).await?.is_none());
    assert!(repo.find_pending_application(first.id, 11).await?.is_none());

    Ok(())
}
