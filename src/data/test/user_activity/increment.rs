use super::*;

/// Tests that increments update both the totals and the daily row.
///
/// Verifies that repeated events accumulate in a single row per table.
///
/// Expected: Ok with 2 messages, 1 reaction and 15 voice minutes
#[tokio::test]
async fn accumulates_totals_and_daily() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = UserActivityRepository::new(db);
    repo.increment(1, 10, ActivityKind::Message, 1, now).await?;
    repo.increment(1, 10, ActivityKind::Message, 1, now).await?;
    repo.increment(1, 10, ActivityKind::Reaction, 1, now).await?;
    repo.increment(1, 10, ActivityKind::VoiceMinutes, 15, now).await?;

    assert_eq!(entity::prelude::UserActivity::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserActivityDaily::find().count(db).await?, 1);

    let totals = entity::prelude::UserActivity::find().one(db).await?.unwrap();
    assert_eq!(totals.messages, 2);
    assert_eq!(totals.reactions, 1);
    assert_eq!(totals.voice_minutes, 15);

    let daily = entity::prelude::UserActivityDaily::find().one(db).await?.unwrap();
    assert_eq!(daily.day, day_key(now));
    assert_eq!(daily.messages, 2);

    Ok(())
}

/// Tests that activity on another day opens a new daily row.
///
/// Expected: Ok with 2 daily rows and 1 totals row
#[tokio::test]
async fn opens_new_day_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = UserActivityRepository::new(db);
    repo.increment(1, 10, ActivityKind::Message, 1, now - TimeDelta::days(1))
        .await?;
    repo.increment(1, 10, ActivityKind::Message, 1, now).await?;

    assert_eq!(entity::prelude::UserActivity::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserActivityDaily::find().count(db).await?, 2);

    Ok(())
}
