use super::*;

/// Tests a member leaving and rejoining.
///
/// Verifies that the running grant is restored with its original end time and the grant
/// that ran out while the member was away is dropped.
///
/// Expected: 1 restored, 1 dropped, snapshot consumed
#[tokio::test]
async fn rejoin_restores_running_and_drops_expired() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let running_end = Utc::now() + TimeDelta::days(3);
    factory::promotion_grant::PromotionGrantFactory::new(
        db,
        guild_str(),
        TARGET.to_string(),
        ADMIN_ROLE.to_string(),
    )
    .timed(TimeDelta::days(7), "7d")
    .end_time(Some(running_end))
    .build()
    .await?;
    factory::promotion_grant::PromotionGrantFactory::new(
        db,
        guild_str(),
        TARGET.to_string(),
        JUNIOR_ROLE.to_string(),
    )
    .timed(TimeDelta::days(1), "1d")
    .end_time(Some(Utc::now() + TimeDelta::milliseconds(50)))
    .build()
    .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    fake.remove_member(TARGET);
    assert_eq!(service.handle_member_leave(GUILD, TARGET).await?, 2);
    assert!(service.list_grants(GUILD).await?.is_empty());

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    fake.add_member(TARGET, &[], false);
    let outcome = service.handle_member_rejoin(GUILD, TARGET).await?;

    assert_eq!(outcome.restored.len(), 1);
    assert_eq!(outcome.restored[0].role_id, ADMIN_ROLE);
    let restored_end = outcome.restored[0].end_time.unwrap();
    assert!((restored_end - running_end).num_milliseconds().abs() < 1);
    assert_eq!(outcome.dropped.len(), 1);
    assert_eq!(outcome.dropped[0].role_id, JUNIOR_ROLE);
    assert_eq!(fake.roles_of(TARGET), Some(vec![ADMIN_ROLE]));

    let again = service.handle_member_rejoin(GUILD, TARGET).await?;
    assert_eq!(again, Default::default());

    let actions = logged_actions(db).await?;
    assert!(actions.contains(&LogAction::GrantsSnapshotted));
    assert!(actions.contains(&LogAction::GrantRestored));
    assert!(actions.contains(&LogAction::GrantDropped));

    Ok(())
}

/// Tests a member without grants leaving.
///
/// Expected: 0 snapshotted and nothing logged
#[tokio::test]
async fn leave_without_grants_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let moved = service(db, &fake, &guard)
        .handle_member_leave(GUILD, TARGET)
        .await?;

    assert_eq!(moved, 0);
    assert!(logged_actions(db).await?.is_empty());

    Ok(())
}

/// Tests a rejoin whose role cannot be re-added.
///
/// Verifies that the running grant stays in the snapshot instead of being lost, and that
/// a later rejoin with Discord working again restores it.
///
/// Expected: kept on the first rejoin, restored on the second
#[tokio::test]
async fn rejoin_keeps_grants_that_fail_to_restore() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_left_member_grant(
        db,
        &guild_str(),
        &TARGET.to_string(),
        &ADMIN_ROLE.to_string(),
        None,
    )
    .await?;

    let fake = FakeGateway::standard();
    fake.fail_role_changes(true);
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let outcome = service.handle_member_rejoin(GUILD, TARGET).await?;

    assert!(outcome.restored.is_empty());
    assert!(outcome.dropped.is_empty());
    assert_eq!(outcome.kept.len(), 1);
    assert!(service.list_grants(GUILD).await?.is_empty());

    // The running grant stays saved and comes back on the next rejoin.
    assert_eq!(
        LeftMemberRepository::new(db).get(GUILD, TARGET).await?.len(),
        1
    );

    fake.fail_role_changes(false);
    let retried = service.handle_member_rejoin(GUILD, TARGET).await?;

    assert_eq!(retried.restored.len(), 1);
    assert!(retried.kept.is_empty());
    assert!(LeftMemberRepository::new(db)
        .get(GUILD, TARGET)
        .await?
        .is_empty());
    assert!(logged_actions(db).await?.contains(&LogAction::GrantRestored));

    Ok(())
}

/// Tests role removals done by someone other than the bot.
///
/// Verifies that only allow-listed roles with an active grant are reported and that the
/// grant record is kept.
///
/// Expected: 1 reported out of three removed roles
#[tokio::test]
async fn reports_external_removal_of_granted_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    factory::create_grant(db, &guild_str(), &TARGET.to_string(), &ADMIN_ROLE.to_string())
        .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let reported = service
        .record_external_removals(GUILD, TARGET, &[ADMIN_ROLE, JUNIOR_ROLE, HELPER_ROLE])
        .await?;

    assert_eq!(reported, 1);
    assert_eq!(service.list_grants(GUILD).await?.len(), 1);
    assert_eq!(
        logged_actions(db).await?,
        vec![LogAction::RoleRemovedExternally]
    );

    Ok(())
}

/// Tests that removals marked by the bot are not reported.
///
/// Expected: 0 reported while the mark is fresh
#[tokio::test]
async fn ignores_removals_marked_by_bot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    factory::create_grant(db, &guild_str(), &TARGET.to_string(), &ADMIN_ROLE.to_string())
        .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    guard.mark(GUILD, TARGET, ADMIN_ROLE).await;

    let reported = service(db, &fake, &guard)
        .record_external_removals(GUILD, TARGET, &[ADMIN_ROLE])
        .await?;

    assert_eq!(reported, 0);

    Ok(())
}
