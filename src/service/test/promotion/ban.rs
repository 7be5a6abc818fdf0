use super::*;

fn ban_param(duration: PromotionDuration) -> AddBanParam {
    AddBanParam {
        guild_id: GUILD,
        user_id: TARGET,
        by_user_id: GRANTER,
        duration,
        reason: "Abused permissions".to_string(),
    }
}

/// Tests banning a member and then promoting them.
///
/// Verifies that the ban is stored with its end time and blocks promotions until it is
/// removed.
///
/// Expected: TargetBanned while banned, Ok after unban
#[tokio::test]
async fn ban_blocks_promotion_until_removed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let ban = service
        .add_promotion_ban(ban_param(PromotionDuration::Timed(TimeDelta::days(30))))
        .await?;
    assert_eq!(ban.end_time, Some(ban.start_time + TimeDelta::days(30)));
    assert_eq!(fake.dm_count(TARGET), 1);

    let blocked = service
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await;
    assert!(matches!(
        blocked,
        Err(AppError::PromotionErr(PromotionError::TargetBanned))
    ));

    service.remove_promotion_ban(GUILD, TARGET, GRANTER).await?;
    service
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await?;

    let actions = logged_actions(db).await?;
    assert!(actions.contains(&LogAction::BanAdded));
    assert!(actions.contains(&LogAction::BanRemoved));

    Ok(())
}

/// Tests banning a member twice.
///
/// Expected: Err(AlreadyBanned)
#[tokio::test]
async fn rejects_duplicate_ban() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    service
        .add_promotion_ban(ban_param(PromotionDuration::Permanent))
        .await?;
    let result = service
        .add_promotion_ban(ban_param(PromotionDuration::Permanent))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::AlreadyBanned))
    ));

    Ok(())
}

/// Tests removing a ban that does not exist.
///
/// Expected: Err(NotBanned)
#[tokio::test]
async fn rejects_unban_of_unbanned_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let result = service(db, &fake, &guard)
        .remove_promotion_ban(GUILD, TARGET, GRANTER)
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::NotBanned))
    ));

    Ok(())
}

/// Tests expiring lapsed bans.
///
/// Verifies that only bans whose end time passed are removed, the member is told once,
/// and a second run is a no-op.
///
/// Expected: 1 then 0, one DM, permanent ban kept
#[tokio::test]
async fn expires_lapsed_bans_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ban_until(
        db,
        &guild_str(),
        &TARGET.to_string(),
        Some(Utc::now() - TimeDelta::minutes(1)),
    )
    .await?;
    factory::create_ban(db, &guild_str(), &GRANTER.to_string()).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let now = Utc::now();
    assert_eq!(service.expire_bans(now).await?, 1);
    assert_eq!(service.expire_bans(now).await?, 0);
    assert_eq!(fake.dm_count(TARGET), 1);
    assert_eq!(fake.dm_count(GRANTER), 0);

    let bans = service.list_bans(GUILD).await?;
    assert_eq!(bans.len(), 1);
    assert_eq!(bans[0].user_id, GRANTER);

    Ok(())
}
