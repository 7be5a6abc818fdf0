use super::*;
use crate::service::stats::StatsService;

/// Tests the status view of a promoted member.
///
/// Verifies that the grant, activity counters and the member's own log entries are
/// collected, while another member's entries are left out.
///
/// Expected: Ok with one grant, two messages and only the target's history
#[tokio::test]
async fn collects_grants_stats_and_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    service
        .create_promotion(grant_param(GRANTER, PromotionDuration::Timed(TimeDelta::days(7))))
        .await?;
    service
        .add_promotion_ban(AddBanParam {
            guild_id: GUILD,
            user_id: LOW_GRANTER,
            by_user_id: GRANTER,
            duration: PromotionDuration::Permanent,
            reason: "Abused permissions".to_string(),
        })
        .await?;

    let stats = StatsService::new(db);
    stats.record_message(GUILD, TARGET).await?;
    stats.record_message(GUILD, TARGET).await?;

    let status = service.user_status(GUILD, TARGET).await?;

    assert_eq!(status.grants.len(), 1);
    assert_eq!(status.grants[0].role_id, ADMIN_ROLE);
    assert!(status.ban.is_none());
    assert_eq!(status.stats.messages, 2);

    let history: Vec<LogAction> = status.history.iter().map(|e| e.action).collect();
    assert_eq!(history, vec![LogAction::GrantCreated]);

    Ok(())
}

/// Tests the status view of a member nobody has touched.
///
/// Expected: Ok with no grants, no ban and an empty history
#[tokio::test]
async fn empty_status_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let status = service(db, &fake, &guard).user_status(GUILD, TARGET).await?;

    assert!(status.grants.is_empty());
    assert!(status.ban.is_none());
    assert!(status.history.is_empty());

    Ok(())
}
