use super::*;

/// Tests ending a promotion early.
///
/// Verifies that the role is removed, the grant deleted and the removal is not later
/// reported as external.
///
/// Expected: Ok with grant gone and GrantEnded logged
#[tokio::test]
async fn ends_promotion_and_removes_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    allow_admin_roles(db).await?;

    factory::create_grant(db, &guild_str(), &TARGET.to_string(), &ADMIN_ROLE.to_string())
        .await?;

    let fake = FakeGateway::standard();
    fake.add_member(TARGET, &[JUNIOR_ROLE, ADMIN_ROLE], false);
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let ended = service
        .end_promotion(EndPromotionParam {
            guild_id: GUILD,
            user_id: TARGET,
            role_id: ADMIN_ROLE,
            by_user_id: GRANTER,
            reason: "Stepped down".to_string(),
        })
        .await?;

    assert_eq!(ended.role_id, ADMIN_ROLE);
    assert_eq!(fake.roles_of(TARGET), Some(vec![JUNIOR_ROLE]));
    assert!(service.list_grants(GUILD).await?.is_empty());
    assert_eq!(
        service
            .record_external_removals(GUILD, TARGET, &[ADMIN_ROLE])
            .await?,
        0
    );
    assert!(logged_actions(db).await?.contains(&LogAction::GrantEnded));

    Ok(())
}

/// Tests ending a promotion that does not exist.
///
/// Expected: Err(GrantNotFound)
#[tokio::test]
async fn rejects_ending_unknown_promotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();

    let result = service(db, &fake, &guard)
        .end_promotion(EndPromotionParam {
            guild_id: GUILD,
            user_id: TARGET,
            role_id: ADMIN_ROLE,
            by_user_id: GRANTER,
            reason: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::PromotionErr(PromotionError::GrantNotFound))
    ));

    Ok(())
}

/// Tests changing a permanent promotion into a timed one.
///
/// Expected: Ok with end time about three days from now
#[tokio::test]
async fn changes_duration_from_now() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grant =
        factory::create_grant(db, &guild_str(), &TARGET.to_string(), &ADMIN_ROLE.to_string())
            .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let before = Utc::now() - TimeDelta::seconds(1);

    let modified = service(db, &fake, &guard)
        .modify_promotion_duration(grant.id, PromotionDuration::Timed(TimeDelta::days(3)), GRANTER)
        .await?;

    let end = modified.end_time.unwrap();
    assert!(end >= before + TimeDelta::days(3));
    assert!(end <= Utc::now() + TimeDelta::days(3) + TimeDelta::seconds(1));
    assert_eq!(modified.duration, PromotionDuration::Timed(TimeDelta::days(3)));
    assert!(logged_actions(db).await?.contains(&LogAction::GrantModified));

    Ok(())
}

/// Tests making a timed promotion permanent.
///
/// Expected: Ok with no end time, so it never expires
#[tokio::test]
async fn changes_duration_to_permanent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grant = factory::promotion_grant::PromotionGrantFactory::new(
        db,
        guild_str(),
        TARGET.to_string(),
        ADMIN_ROLE.to_string(),
    )
    .timed(TimeDelta::days(1), "1d")
    .build()
    .await?;

    let fake = FakeGateway::standard();
    let guard = RoleChangeGuard::new();
    let service = service(db, &fake, &guard);

    let modified = service
        .modify_promotion_duration(grant.id, PromotionDuration::Permanent, GRANTER)
        .await?;

    assert!(modified.end_time.is_none());
    assert_eq!(
        service
            .expire_grants(Utc::now() + TimeDelta::days(365))
            .await?,
        0
    );

    Ok(())
}
