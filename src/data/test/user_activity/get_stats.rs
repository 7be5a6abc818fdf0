use super::*;

/// Tests building stats from totals and the last seven days.
///
/// Verifies that daily rows older than seven days are excluded from the window.
///
/// Expected: Ok with totals from the totals row and 2 active days in the window
#[tokio::test]
async fn sums_last_seven_days() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_activity(db, "1", "10", 500, 90, 40).await?;
    factory::create_daily_activity(db, "1", "10", &day_key(now), 5).await?;
    factory::create_daily_activity(db, "1", "10", &day_key(now - TimeDelta::days(6)), 7).await?;
    factory::create_daily_activity(db, "1", "10", &day_key(now - TimeDelta::days(7)), 100)
        .await?;

    let repo = UserActivityRepository::new(db);
    let stats = repo.get_stats(1, 10, now).await?;

    assert_eq!(stats.messages, 500);
    assert_eq!(stats.voice_minutes, 90);
    assert_eq!(stats.reactions, 40);
    assert_eq!(stats.last_7_days.messages, 12);
    assert_eq!(stats.last_7_days.active_days, 2);

    Ok(())
}

/// Tests stats for a member with no activity.
///
/// Expected: Ok with all counters zero
#[tokio::test]
async fn zero_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserActivityRepository::new(db);
    let stats = repo.get_stats(1, 10, Utc::now()).await?;

    assert_eq!(stats, Default::default());

    Ok(())
}
