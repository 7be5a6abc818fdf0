use super::*;

/// Tests listing a guild's grants.
///
/// Verifies that grants are ordered by end time with permanent grants last, and that other
/// guilds' grants are excluded.
///
/// Expected: Ok with soonest-ending grant first
#[tokio::test]
async fn orders_by_end_time_with_permanent_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let permanent = factory::create_grant(db, "1", "10", "100").await?;
    let later = factory::promotion_grant::PromotionGrantFactory::new(db, "1", "11", "100")
        .timed(TimeDelta::days(7), "7d")
        .build()
        .await?;
    let sooner = factory::promotion_grant::PromotionGrantFactory::new(db, "1", "12", "100")
        .timed(TimeDelta::hours(1), "1h")
        .build()
        .await?;
    factory::create_grant(db, "2", "10", "100").await?;

    let repo = PromotionGrantRepository::new(db);
    let grants = repo.get_by_guild(1).await?;

    let ids: Vec<i32> = grants.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id, permanent.id]);

    Ok(())
}
