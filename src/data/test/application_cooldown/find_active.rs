use super::*;

/// Tests that only unexpired cooldowns are active.
///
/// Expected: Ok(Some) for the future cooldown, None for the lapsed one
#[tokio::test]
async fn ignores_lapsed_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_cooldown(db, "1", "10", Utc::now() + TimeDelta::hours(1)).await?;
    factory::create_cooldown(db, "1", "11", Utc::now() - TimeDelta::hours(1)).await?;

    let repo = ApplicationCooldownRepository::new(db);

    assert!(repo.find_active(1, 10, Utc::now()).await?.is_some());
    assert!(repo.find_active(1, 11, Utc::now()).await?.is_none());

    Ok(())
}
