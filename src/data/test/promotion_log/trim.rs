use super::*;

/// Tests trimming the log to a smaller size.
///
/// Verifies that the oldest entries are evicted first.
///
/// Expected: Ok with 2 evicted and the newest 3 kept
#[tokio::test]
async fn evicts_oldest_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionLogRepository::new(db);
    for user_id in 1..=5 {
        repo.append(entry(1, user_id, LogAction::GrantExpired)).await?;
    }

    let evicted = repo.trim(3).await?;
    assert_eq!(evicted, 2);

    let remaining: Vec<String> = entity::prelude::PromotionLog::find()
        .order_by_asc(entity::promotion_log::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.user_id)
        .collect();
    assert_eq!(remaining, vec!["3", "4", "5"]);

    Ok(())
}

/// Tests trimming when already under the cap.
///
/// Expected: Ok(0) with nothing deleted
#[tokio::test]
async fn noop_under_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionLogRepository::new(db);
    repo.append(entry(1, 1, LogAction::BanAdded)).await?;

    assert_eq!(repo.trim(10).await?, 0);
    assert_eq!(entity::prelude::PromotionLog::find().count(db).await?, 1);

    Ok(())
}
