use super::*;

/// Tests moving a leaving member's grants into the snapshot.
///
/// Verifies that the member's grant rows are removed, snapshot rows are created with the
/// same end times, and other members' grants are untouched.
///
/// Expected: Ok with 2 grants moved
#[tokio::test]
async fn moves_member_grants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_grant(db, "1", "10", "100").await?;
    let timed = factory::promotion_grant::PromotionGrantFactory::new(db, "1", "10", "101")
        .timed(TimeDelta::days(3), "3d")
        .build()
        .await?;
    factory::create_grant(db, "1", "11", "100").await?;

    let repo = LeftMemberRepository::new(db);
    let moved = repo.snapshot_grants(1, 10, Utc::now()).await?;

    assert_eq!(moved.len(), 2);
    assert_eq!(entity::prelude::PromotionGrant::find().count(db).await?, 1);

    let snapshot = repo.get(1, 10).await?;
    assert_eq!(snapshot.len(), 2);
    let timed_snapshot = snapshot.iter().find(|g| g.role_id == 101).unwrap();
    assert_eq!(timed_snapshot.end_time, timed.end_time);

    Ok(())
}

/// Tests snapshotting a member with no grants.
///
/// Expected: Ok with nothing moved
#[tokio::test]
async fn noop_without_grants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeftMemberRepository::new(db);
    let moved = repo.snapshot_grants(1, 10, Utc::now()).await?;

    assert!(moved.is_empty());
    assert_eq!(entity::prelude::LeftMemberGrant::find().count(db).await?, 0);

    Ok(())
}
