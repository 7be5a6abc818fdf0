use super::*;

/// Tests selecting expired grants.
///
/// Verifies that only timed grants whose end time has passed are returned, across guilds,
/// and that permanent and future grants are left out.
///
/// Expected: Ok with exactly the expired grants
#[tokio::test]
async fn returns_only_expired_timed_grants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let expired_a = factory::create_expired_grant(db, "1", "10", "100", TimeDelta::minutes(5)).await?;
    let expired_b = factory::create_expired_grant(db, "2", "20", "200", TimeDelta::seconds(1)).await?;
    factory::create_grant(db, "1", "11", "100").await?;
    factory::promotion_grant::PromotionGrantFactory::new(db, "1", "12", "100")
        .timed(TimeDelta::days(1), "1d")
        .build()
        .await?;

    let repo = PromotionGrantRepository::new(db);
    let expired = repo.get_expired(Utc::now()).await?;

    let ids: Vec<i32> = expired.iter().map(|g| g.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&expired_a.id));
    assert!(ids.contains(&expired_b.id));

    Ok(())
}

/// Tests selecting expired grants when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_grant(db, "1", "10", "100").await?;

    let repo = PromotionGrantRepository::new(db);
    let expired = repo.get_expired(Utc::now()).await?;

    assert!(expired.is_empty());

    Ok(())
}
