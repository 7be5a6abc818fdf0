//! `promote` subcommands and the grant shortcut.

use serenity::all::CreateMessage;

use crate::{
    bot::{
        command::{Invocation, PromoteCommand},
        panel,
    },
    error::{promotion::PromotionError, AppError},
    model::{
        duration::PromotionDuration,
        promotion::{AddBanParam, CreatePromotionParam, EndPromotionParam},
        settings::SettingsUpdate,
    },
    service::{promotion::embed::grant_summary_embed, settings::SettingsService},
    util::time::discord_until,
};

fn text(content: impl Into<String>) -> CreateMessage {
    CreateMessage::new().content(content)
}

fn toggle(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

pub async fn run(inv: &Invocation<'_>, command: PromoteCommand) -> Result<CreateMessage, AppError> {
    let settings = SettingsService::new(&inv.state.db);
    let promotions = inv.state.promotions(inv.http);

    let reply = match command {
        PromoteCommand::Setup => {
            let (embed, components) = panel::promotion_panel();
            CreateMessage::new().embed(embed).components(components)
        }
        PromoteCommand::ListRoles => {
            let current = settings.get(inv.guild_id).await?;
            let roles = settings.admin_roles(inv.guild_id).await?;
            CreateMessage::new().embed(panel::settings_embed(&current, &roles))
        }
        PromoteCommand::AddRole(role_id) => {
            settings.add_admin_role(inv.guild_id, role_id).await?;
            text(format!("<@&{}> can now be granted through promotions.", role_id))
        }
        PromoteCommand::RemoveRole(role_id) => {
            settings.remove_admin_role(inv.guild_id, role_id).await?;
            text(format!(
                "<@&{}> can no longer be granted. Existing grants still expire normally.",
                role_id
            ))
        }
        PromoteCommand::SetChannel(channel, channel_id) => {
            settings
                .update(inv.guild_id, SettingsUpdate::Channel(channel, channel_id))
                .await?;
            match channel_id {
                Some(id) => text(format!("{} channel set to <#{}>.", channel.label(), id)),
                None => text(format!("{} channel cleared.", channel.label())),
            }
        }
        PromoteCommand::Cooldown(hours) => {
            settings
                .update(inv.guild_id, SettingsUpdate::ApplicationCooldownHours(hours))
                .await?;
            text(format!(
                "Rejected candidates now wait {}h before they can be nominated again.",
                hours
            ))
        }
        PromoteCommand::Replace(on) => {
            settings
                .update(inv.guild_id, SettingsUpdate::ReplacePreviousRole(on))
                .await?;
            text(format!(
                "Replacing the previous admin role on permanent grants is {}.",
                toggle(on)
            ))
        }
        PromoteCommand::Dm(on) => {
            settings
                .update(inv.guild_id, SettingsUpdate::DmNotifications(on))
                .await?;
            text(format!("DM notifications are {}.", toggle(on)))
        }
        PromoteCommand::List => {
            let grants = promotions.list_grants(inv.guild_id).await?;
            let bans = promotions.list_bans(inv.guild_id).await?;
            CreateMessage::new().embed(panel::grants_embed(&grants, &bans))
        }
        PromoteCommand::Logs(count) => {
            let entries = promotions.recent_logs(inv.guild_id, count).await?;
            CreateMessage::new().embed(panel::logs_embed(&entries))
        }
        PromoteCommand::Status(user_id) => {
            let status = promotions.user_status(inv.guild_id, user_id).await?;
            CreateMessage::new()
                .embed(panel::status_embed(&status))
                .components(panel::status_components(&status))
        }
        PromoteCommand::End {
            user_id,
            role_id,
            reason,
        } => {
            promotions
                .end_promotion(EndPromotionParam {
                    guild_id: inv.guild_id,
                    user_id,
                    role_id,
                    by_user_id: inv.user_id,
                    reason,
                })
                .await?;
            text(format!("Ended <@{}>'s promotion to <@&{}>.", user_id, role_id))
        }
        PromoteCommand::Extend {
            user_id,
            role_id,
            duration,
        } => {
            let grant = promotions
                .find_grant(inv.guild_id, user_id, role_id)
                .await?
                .ok_or(PromotionError::GrantNotFound)?;
            let grant = promotions
                .modify_promotion_duration(grant.id, duration, inv.user_id)
                .await?;
            CreateMessage::new().embed(grant_summary_embed("Promotion duration changed", &grant))
        }
        PromoteCommand::Ban {
            user_id,
            duration,
            reason,
        } => {
            let ban = promotions
                .add_promotion_ban(AddBanParam {
                    guild_id: inv.guild_id,
                    user_id,
                    by_user_id: inv.user_id,
                    duration,
                    reason,
                })
                .await?;
            text(format!(
                "<@{}> is banned from promotions until {}.",
                user_id,
                discord_until(ban.end_time)
            ))
        }
        PromoteCommand::Unban(user_id) => {
            promotions
                .remove_promotion_ban(inv.guild_id, user_id, inv.user_id)
                .await?;
            text(format!("<@{}> can be promoted again.", user_id))
        }
    };

    Ok(reply)
}

/// Grants a promotion from the `p` shortcut.
pub async fn grant(
    inv: &Invocation<'_>,
    user_id: u64,
    role_id: u64,
    duration: PromotionDuration,
    reason: String,
) -> Result<CreateMessage, AppError> {
    let grant = inv
        .state
        .promotions(inv.http)
        .create_promotion(CreatePromotionParam {
            guild_id: inv.guild_id,
            target_id: user_id,
            role_id,
            granter_id: inv.user_id,
            duration,
            reason,
        })
        .await?;

    Ok(CreateMessage::new().embed(grant_summary_embed("Promotion granted", &grant)))
}
