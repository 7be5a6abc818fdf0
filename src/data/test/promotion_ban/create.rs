use super::*;

/// Tests that storing a ban replaces the member's previous ban row.
///
/// Verifies that a member never has more than one ban row per guild.
///
/// Expected: Ok with a single row holding the new reason
#[tokio::test]
async fn replaces_existing_ban_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ban_until(db, "1", "10", Some(Utc::now() - TimeDelta::minutes(1))).await?;

    let repo = PromotionBanRepository::new(db);
    let ban = repo
        .create(NewPromotionBan {
            guild_id: 1,
            user_id: 10,
            reason: "Spamming".to_string(),
            by_user_id: 99,
            start_time: Utc::now(),
            end_time: None,
        })
        .await?;

    assert_eq!(ban.reason, "Spamming");
    assert!(ban.end_time.is_none());

    let rows = entity::prelude::PromotionBan::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
