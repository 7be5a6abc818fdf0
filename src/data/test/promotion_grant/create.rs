use super::*;

fn new_grant(duration: PromotionDuration) -> NewPromotionGrant {
    let start = Utc::now();
    NewPromotionGrant {
        guild_id: 1,
        user_id: 2,
        role_id: 3,
        reason: "Trusted helper".to_string(),
        by_user_id: 4,
        start_time: start,
        end_time: duration.end_time(start),
        duration,
        user_stats_snapshot: None,
    }
}

/// Tests creating a timed grant.
///
/// Verifies that the stored grant keeps its ids, canonical duration label and end time.
///
/// Expected: Ok with grant persisted
#[tokio::test]
async fn creates_timed_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let param = new_grant(PromotionDuration::Timed(TimeDelta::days(7)));
    let expected_end = param.end_time;

    let repo = PromotionGrantRepository::new(db);
    let grant = repo.create(param).await?;

    assert_eq!(grant.guild_id, 1);
    assert_eq!(grant.user_id, 2);
    assert_eq!(grant.role_id, 3);
    assert_eq!(grant.end_time, expected_end);

    let stored = entity::prelude::PromotionGrant::find_by_id(grant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.duration, "7d");
    assert_eq!(stored.status, "active");

    Ok(())
}

/// Tests creating a permanent grant.
///
/// Verifies that permanent grants are stored without an end time.
///
/// Expected: Ok with end_time None
#[tokio::test]
async fn creates_permanent_grant_without_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionGrantRepository::new(db);
    let grant = repo.create(new_grant(PromotionDuration::Permanent)).await?;

    assert_eq!(grant.duration, PromotionDuration::Permanent);
    assert!(grant.end_time.is_none());

    Ok(())
}

/// Tests that the stats snapshot is stored with the grant.
///
/// Expected: Ok with the same snapshot read back
#[tokio::test]
async fn stores_stats_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = UserStats {
        messages: 42,
        ..Default::default()
    };
    let mut param = new_grant(PromotionDuration::Permanent);
    param.user_stats_snapshot = Some(stats.clone());

    let repo = PromotionGrantRepository::new(db);
    let grant = repo.create(param).await?;
    let found = repo.find_by_id(grant.id).await?.unwrap();

    assert_eq!(found.user_stats_snapshot, Some(stats));

    Ok(())
}
