use super::*;

/// Tests that a new cooldown replaces the previous one.
///
/// Expected: Ok with one row holding the later end time
#[tokio::test]
async fn replaces_previous_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_application_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_cooldown(db, "1", "10", Utc::now() + TimeDelta::hours(1)).await?;

    let until = Utc::now() + TimeDelta::hours(72);
    let repo = ApplicationCooldownRepository::new(db);
    let cooldown = repo.upsert(1, 10, 99, "Too new", until).await?;

    assert_eq!(cooldown.until, until);
    assert_eq!(cooldown.rejected_by, 99);
    assert_eq!(entity::prelude::ApplicationCooldown::find().count(db).await?, 1);

    Ok(())
}
