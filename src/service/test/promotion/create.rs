use super::*;

/// Tests a permanent promotion.
///
/// Verifies that the role is added, the junior admin role it replaces is removed, the
/// grant has no end time, the change is logged and the member is sent a DM.
///
/// Expected: Ok with permanent grant and previous role removed
#[tokio::test]
async fn grants_permanent_promotion_and_replaces_previous_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let grant = service(db, &fake, &guard)
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await?;

    assert_eq!(grant.role_id, ADMIN_ROLE);
    assert_eq!(grant.by_user_id, GRANTER);
    assert!(grant.end_time.is_none());
    assert_eq!(fake.roles_of(TARGET), Some(vec![ADMIN_ROLE]));
    assert_eq!(fake.dm_count(TARGET), 1);

    let actions = logged_actions(db).await?;
    assert!(actions.contains(&LogAction::GrantCreated));

    // the bot's own removal is not an external change
    let reported = service(db, &fake, &guard)
        .record_external_removals(GUILD, TARGET, &[JUNIOR_ROLE])
        .await?;
    assert_eq!(reported, 0);

    Ok(())
}

/// Tests a timed promotion.
///
/// Verifies that a 7 day grant ends seven days after it starts and leaves the member's
/// previous admin role alone.
///
/// Expected: Ok with end_time = start_time + 7d
#[tokio::test]
async fn grants_timed_promotion_without_replacing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let before = Utc::now() - TimeDelta::seconds(1);

    let grant = service(db, &fake, &guard)
        .create_promotion(grant_param(
            GRANTER,
            PromotionDuration::Timed(TimeDelta::days(7)),
        ))
        .await?;

    assert_eq!(grant.end_time, Some(grant.start_time + TimeDelta::days(7)));
    assert!(grant.start_time >= before);

    let roles = fake.roles_of(TARGET).unwrap();
    assert!(roles.contains(&ADMIN_ROLE));
    assert!(roles.contains(&JUNIOR_ROLE));
    assert!(fake.removed.lock().unwrap().is_empty());

    Ok(())
}

/// Tests a granter whose highest role sits below the granted role.
///
/// Expected: Err(GranterTooLow) with no role change and no grant stored
#[tokio::test]
async fn rejects_granter_below_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let result = service(db, &fake, &guard)
        .create_promotion(grant_param(LOW_GRANTER, PromotionDuration::Permanent))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::GranterTooLow))
    ));
    assert_eq!(fake.roles_of(TARGET), Some(vec![JUNIOR_ROLE]));
    assert!(PromotionGrantRepository::new(db)
        .get_by_guild(GUILD)
        .await?
        .is_empty());

    Ok(())
}

/// Tests the guild owner granting a role without holding any.
///
/// Expected: Ok, owners bypass the granter position check
#[tokio::test]
async fn owner_bypasses_granter_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let grant = service(db, &fake, &guard)
        .create_promotion(grant_param(OWNER, PromotionDuration::Permanent))
        .await?;

    assert_eq!(grant.by_user_id, OWNER);

    Ok(())
}

/// Tests granting a role missing from the allow-list.
///
/// Expected: Err(RoleNotAllowed)
#[tokio::test]
async fn rejects_role_not_allow_listed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let mut param = grant_param(GRANTER, PromotionDuration::Permanent);
    param.role_id = HELPER_ROLE;

    let result = service(db, &fake, &guard).create_promotion(param).await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::RoleNotAllowed))
    ));

    Ok(())
}

/// Tests granting an allow-listed role that sits above the bot.
///
/// Expected: Err(RoleAboveBot)
#[tokio::test]
async fn rejects_role_above_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_admin_role(db, &guild_str(), &TOP_ROLE.to_string()).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let mut param = grant_param(OWNER, PromotionDuration::Permanent);
    param.role_id = TOP_ROLE;

    let result = service(db, &fake, &guard).create_promotion(param).await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::RoleAboveBot))
    ));

    Ok(())
}

/// Tests promoting a member who is banned from promotions.
///
/// Expected: Err(TargetBanned) with no role change
#[tokio::test]
async fn rejects_banned_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;
    factory::create_ban(db, &guild_str(), &TARGET.to_string()).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let result = service(db, &fake, &guard)
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::TargetBanned))
    ));
    assert_eq!(fake.roles_of(TARGET), Some(vec![JUNIOR_ROLE]));

    Ok(())
}

/// Tests granting a role the member already holds.
///
/// Expected: Err(AlreadyHasRole)
#[tokio::test]
async fn rejects_role_already_held() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let mut param = grant_param(GRANTER, PromotionDuration::Permanent);
    param.role_id = JUNIOR_ROLE;

    let result = service(db, &fake, &guard).create_promotion(param).await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::AlreadyHasRole))
    ));

    Ok(())
}

/// Tests promoting a user who is not in the guild.
///
/// Expected: Err(MemberNotFound)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    let fake = FakeGateway::standard();
    fake.remove_member(TARGET);
    let guard = RoleChangeGuard::new();

    let result = service(db, &fake, &guard)
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::MemberNotFound))
    ));

    Ok(())
}

/// Tests a permanent promotion in a guild that keeps previous roles.
///
/// Expected: Ok with both admin roles on the member
#[tokio::test]
async fn keeps_previous_role_when_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;
    factory::guild_settings::GuildSettingsFactory::new(db, guild_str())
        .replace_previous_role(false)
        .dm_notifications(false)
        .build()
        .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    service(db, &fake, &guard)
        .create_promotion(grant_param(GRANTER, PromotionDuration::Permanent))
        .await?;

    let roles = fake.roles_of(TARGET).unwrap();
    assert!(roles.contains(&JUNIOR_ROLE));
    assert_eq!(fake.dm_count(TARGET), 0);

    Ok(())
}
