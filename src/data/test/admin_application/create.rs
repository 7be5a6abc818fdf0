use super::*;

/// Tests storing an application with its stats snapshot.
///
/// Expected: Ok with the application found by id and by candidate
#[tokio::test]
async fn creates_application_with_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = UserStats {
        messages: 120,
        voice_minutes: 30,
        ..Default::default()
    };

    let repo = AdminApplicationRepository::new(db);
    let created = repo.create("abcDEF123456", 1, 10, 20, &stats).await?;

    assert_eq!(created.id, "abcDEF123456");
    assert_eq!(created.user_stats_snapshot, Some(stats));

    let by_candidate = repo.find_by_candidate(1, 10).await?.unwrap();
    assert_eq!(by_candidate.id, created.id);
    assert_eq!(by_candidate.requester_id, 20);
    assert!(repo.find_by_candidate(2, 10).await?.is_none());

    Ok(())
}

/// Tests recording the approval embed location.
///
/// Expected: Ok with channel and message ids stored
#[tokio::test]
async fn stores_message_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db, "1", "10", "20").await?;

    let repo = AdminApplicationRepository::new(db);
    repo.set_message(&application.id, 300, 400).await?;
    let found = repo.find_by_id(&application.id).await?.unwrap();

    assert_eq!(found.channel_id, Some(300));
    assert_eq!(found.message_id, Some(400));

    Ok(())
}
