use super::*;

/// Tests recording a decision.
///
/// Expected: Ok with status, decider and decision time set
#[tokio::test]
async fn records_decision() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::create_suggest_request(db, "1", "10", "Art").await?;

    let repo = ResponsibilityRequestRepository::new(db);
    let decided = repo
        .decide(request.id, RequestStatus::Approved, 99)
        .await?
        .unwrap();

    assert_eq!(decided.status, RequestStatus::Approved);
    assert_eq!(decided.decided_by, Some(99));
    assert!(decided.decided_at.is_some());
    assert!(repo.get_pending(1).await?.is_empty());

    Ok(())
}

/// Tests recording where the review embed was posted.
///
/// Expected: Ok with channel and message ids stored
#[tokio::test]
async fn stores_review_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_responsibility_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::create_suggest_request(db, "1", "10", "Art").await?;

    let repo = ResponsibilityRequestRepository::new(db);
    repo.set_message(request.id, 500, 600).await?;
    let found = repo.find_by_id(request.id).await?.unwrap();

    assert_eq!(found.channel_id, Some(500));
    assert_eq!(found.message_id, Some(600));

    Ok(())
}
