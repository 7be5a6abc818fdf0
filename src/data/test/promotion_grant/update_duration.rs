use super::*;

/// Tests changing a timed grant to permanent.
///
/// Verifies that both the duration label and the end time change together.
///
/// Expected: Ok with permanent grant and no end time
#[tokio::test]
async fn updates_duration_and_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grant = factory::promotion_grant::PromotionGrantFactory::new(db, "1", "10", "100")
        .timed(TimeDelta::days(1), "1d")
        .build()
        .await?;

    let repo = PromotionGrantRepository::new(db);
    let updated = repo
        .update_duration(grant.id, PromotionDuration::Permanent, None)
        .await?
        .unwrap();

    assert_eq!(updated.duration, PromotionDuration::Permanent);
    assert!(updated.end_time.is_none());

    Ok(())
}

/// Tests updating a grant that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionGrantRepository::new(db);
    let result = repo
        .update_duration(999, PromotionDuration::Permanent, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
