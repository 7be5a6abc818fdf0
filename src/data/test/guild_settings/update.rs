use super::*;

/// Tests the first change to a guild's settings.
///
/// Verifies that the row is created from defaults with the change applied.
///
/// Expected: Ok with the log channel set and other values default
#[tokio::test]
async fn creates_row_on_first_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .update(1, SettingsUpdate::Channel(SettingsChannel::Log, Some(42)))
        .await?;

    assert_eq!(settings.log_channel_id, Some(42));
    assert!(settings.dm_notifications);
    assert_eq!(repo.get(1).await?.log_channel_id, Some(42));

    Ok(())
}

/// Tests clearing a channel and toggling flags on an existing row.
///
/// Expected: Ok with channel cleared and flags updated
#[tokio::test]
async fn updates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promotion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, "1")
        .applications_channel_id(Some("77".to_string()))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    repo.update(1, SettingsUpdate::Channel(SettingsChannel::Applications, None))
        .await?;
    repo.update(1, SettingsUpdate::ReplacePreviousRole(false))
        .await?;
    let settings = repo
        .update(1, SettingsUpdate::ApplicationCooldownHours(24))
        .await?;

    assert!(settings.applications_channel_id.is_none());
    assert!(!settings.replace_previous_role);
    assert_eq!(settings.application_cooldown_hours, 24);

    Ok(())
}
