use super::*;

/// Tests reading a member's snapshot.
///
/// Verifies that only the member's rows in that guild are returned and nothing is removed.
///
/// Expected: Ok with 2 grants, table still holding 3 rows
#[tokio::test]
async fn get_reads_without_removing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_left_member_grant(db, "1", "10", "100", None).await?;
    factory::create_left_member_grant(db, "1", "10", "101", Some(Utc::now() - TimeDelta::hours(1)))
        .await?;
    factory::create_left_member_grant(db, "2", "10", "100", None).await?;

    let repo = LeftMemberRepository::new(db);

    assert_eq!(repo.get(1, 10).await?.len(), 2);
    assert_eq!(entity::prelude::LeftMemberGrant::find().count(db).await?, 3);

    Ok(())
}

/// Tests moving one snapshotted grant back into the active grants.
///
/// Verifies that the grant keeps its role and end time, only that snapshot row is removed,
/// and the member's other saved grant is left in place.
///
/// Expected: Ok with the restored grant, 1 snapshot row left
#[tokio::test]
async fn restore_moves_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let end_time = Utc::now() + TimeDelta::days(2);
    factory::create_left_member_grant(db, "1", "10", "100", Some(end_time)).await?;
    factory::create_left_member_grant(db, "1", "10", "101", None).await?;

    let repo = LeftMemberRepository::new(db);
    let snapshot = repo.get(1, 10).await?;
    let saved = snapshot
        .iter()
        .find(|g| g.role_id == 100)
        .expect("saved grant for role 100");

    let grant = repo.restore(saved).await?;

    assert_eq!(grant.role_id, 100);
    assert_eq!(grant.end_time, saved.end_time);
    assert_eq!(entity::prelude::PromotionGrant::find().count(db).await?, 1);

    let left = repo.get(1, 10).await?;
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].role_id, 101);

    Ok(())
}

/// Tests discarding a snapshotted grant.
///
/// Expected: row removed, no active grant created
#[tokio::test]
async fn discard_removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let saved = factory::create_left_member_grant(
        db,
        "1",
        "10",
        "100",
        Some(Utc::now() - TimeDelta::hours(1)),
    )
    .await?;

    let repo = LeftMemberRepository::new(db);
    repo.discard(saved.id).await?;

    assert!(repo.get(1, 10).await?.is_empty());
    assert_eq!(entity::prelude::PromotionGrant::find().count(db).await?, 0);

    Ok(())
}
