use super::*;

/// Tests reading settings for a guild that never saved any.
///
/// Expected: Ok with default settings
#[tokio::test]
async fn returns_defaults_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get(1).await?;

    assert_eq!(settings.guild_id, 1);
    assert_eq!(
        settings.application_cooldown_hours,
        DEFAULT_APPLICATION_COOLDOWN_HOURS
    );
    assert!(settings.replace_previous_role);
    assert!(settings.log_channel_id.is_none());

    Ok(())
}

/// Tests reading stored settings.
///
/// Expected: Ok with stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, "1")
        .log_channel_id(Some("555".to_string()))
        .dm_notifications(false)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get(1).await?;

    assert_eq!(settings.log_channel_id, Some(555));
    assert!(!settings.dm_notifications);

    Ok(())
}
