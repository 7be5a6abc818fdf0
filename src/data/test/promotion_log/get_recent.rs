use super::*;

/// Tests reading the most recent entries of a guild.
///
/// Verifies newest-first ordering, the limit, and guild scoping.
///
/// Expected: Ok with the two newest entries of guild 1
#[tokio::test]
async fn returns_newest_first_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionLogRepository::new(db);
    repo.append(entry(1, 10, LogAction::GrantCreated)).await?;
    repo.append(entry(2, 20, LogAction::GrantCreated)).await?;
    repo.append(entry(1, 11, LogAction::GrantEnded)).await?;
    repo.append(entry(1, 12, LogAction::BanAdded)).await?;

    let recent = repo.get_recent(1, 2).await?;

    let users: Vec<u64> = recent.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![12, 11]);

    Ok(())
}

/// Tests reading the history of one member.
///
/// Expected: Ok with only that member's entries
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionLogRepository::new(db);
    repo.append(entry(1, 10, LogAction::GrantCreated)).await?;
    repo.append(entry(1, 11, LogAction::GrantCreated)).await?;
    repo.append(entry(1, 10, LogAction::GrantExpired)).await?;

    let history = repo.get_recent_for_user(1, 10, 10).await?;

    let actions: Vec<LogAction> = history.iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![LogAction::GrantExpired, LogAction::GrantCreated]);

    Ok(())
}
