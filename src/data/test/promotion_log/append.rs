use super::*;

/// Tests appending an audit entry.
///
/// Expected: Ok with the entry read back as the same action
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PromotionLogRepository::new(db);
    let appended = repo.append(entry(1, 10, LogAction::GrantCreated)).await?;

    assert_eq!(appended.action, LogAction::GrantCreated);
    assert_eq!(appended.user_id, 10);
    assert_eq!(appended.role_id, Some(100));
    assert!(appended.by_user_id.is_none());

    Ok(())
}
