use super::*;

/// Tests clearing lapsed cooldowns.
///
/// Expected: Ok(1) with the active cooldown kept
#[tokio::test]
async fn deletes_only_lapsed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_cooldown(db, "1", "10", Utc::now() + TimeDelta::hours(1)).await?;
    factory::create_cooldown(db, "1", "11", Utc::now() - TimeDelta::hours(1)).await?;

    let repo = ApplicationCooldownRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await?, 1);
    assert_eq!(entity::prelude::ApplicationCooldown::find().count(db).await?, 1);

    Ok(())
}
