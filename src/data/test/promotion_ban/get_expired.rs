use super::*;

/// Tests selecting lapsed bans.
///
/// Verifies that permanent and future bans are excluded.
///
/// Expected: Ok with only the lapsed ban
#[tokio::test]
async fn returns_only_lapsed_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lapsed =
        factory::create_ban_until(db, "1", "10", Some(Utc::now() - TimeDelta::seconds(1))).await?;
    factory::create_ban_until(db, "1", "11", None).await?;
    factory::create_ban(db, "1", "12").await?;

    let repo = PromotionBanRepository::new(db);
    let expired = repo.get_expired(Utc::now()).await?;

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, lapsed.id);

    Ok(())
}
