use super::*;

/// Tests expiring a grant whose end time passed.
///
/// Verifies that the role is removed, the record deleted and a second run finds nothing
/// to do.
///
/// Expected: 1 on the first run, 0 on the second
#[tokio::test]
async fn expires_grant_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_expired_grant(
        db,
        &guild_str(),
        &TARGET.to_string(),
        &ADMIN_ROLE.to_string(),
        TimeDelta::minutes(5),
    )
    .await?;

    let fake = FakeGateway::standard();
    fake.add_member(TARGET, &[JUNIOR_ROLE, ADMIN_ROLE], false);
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let now = Utc::now();
    assert_eq!(service.expire_grants(now).await?, 1);
    assert_eq!(service.expire_grants(now).await?, 0);

    assert_eq!(fake.roles_of(TARGET), Some(vec![JUNIOR_ROLE]));
    assert_eq!(fake.removed.lock().unwrap().len(), 1);
    assert_eq!(fake.dm_count(TARGET), 1);
    assert!(PromotionGrantRepository::new(db)
        .get_by_guild(GUILD)
        .await?
        .is_empty());

    let actions = logged_actions(db).await?;
    assert_eq!(actions, vec![LogAction::GrantExpired]);

    Ok(())
}

/// Tests that running grants are left alone.
///
/// Expected: 0 expired, grant kept
#[tokio::test]
async fn ignores_running_grants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::promotion_grant::PromotionGrantFactory::new(
        db,
        guild_str(),
        TARGET.to_string(),
        ADMIN_ROLE.to_string(),
    )
    .timed(TimeDelta::days(1), "1d")
    .build()
    .await?;
    factory::create_grant(db, &guild_str(), &GRANTER.to_string(), &ADMIN_ROLE.to_string())
        .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let expired = service(db, &fake, &guard).expire_grants(Utc::now()).await?;

    assert_eq!(expired, 0);
    assert_eq!(
        PromotionGrantRepository::new(db).get_by_guild(GUILD).await?.len(),
        2
    );

    Ok(())
}

/// Tests an expired grant whose role could not be removed on Discord.
///
/// Verifies that the record is kept for the next run and that the run succeeds once
/// Discord recovers.
///
/// Expected: 0 while Discord fails, then 1
#[tokio::test]
async fn keeps_grant_when_removal_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_expired_grant(
        db,
        &guild_str(),
        &TARGET.to_string(),
        &ADMIN_ROLE.to_string(),
        TimeDelta::minutes(1),
    )
    .await?;

    let fake = FakeGateway::standard();
    fake.add_member(TARGET, &[ADMIN_ROLE], false);
    fake.fail_role_changes(true);
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    assert_eq!(service.expire_grants(Utc::now()).await?, 0);
    assert_eq!(
        PromotionGrantRepository::new(db).get_by_guild(GUILD).await?.len(),
        1
    );

    fake.fail_role_changes(false);
    assert_eq!(service.expire_grants(Utc::now()).await?, 1);

    Ok(())
}

/// Tests an expired grant of a member who no longer has the role.
///
/// Expected: record deleted without calling Discord
#[tokio::test]
async fn deletes_grant_when_role_already_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_expired_grant(
        db,
        &guild_str(),
        &TARGET.to_string(),
        &ADMIN_ROLE.to_string(),
        TimeDelta::minutes(1),
    )
    .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let expired = service(db, &fake, &guard).expire_grants(Utc::now()).await?;

    assert_eq!(expired, 1);
    assert!(fake.removed.lock().unwrap().is_empty());

    Ok(())
}
