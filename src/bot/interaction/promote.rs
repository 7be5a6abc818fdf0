//! Promotion panel buttons, member status actions and their modals.
//!
//! Granting is open to everyone since the hierarchy checks decide who may grant what.
//! Everything else on the panel is limited to owners, like the `promote` command.

use serenity::all::CreateInteractionResponseMessage;

use crate::{
    bot::{
        command::DEFAULT_LOG_COUNT,
        interaction::{id::InteractionId, Actor, ModalFields, Response},
        panel::{self, FIELD_DURATION, FIELD_REASON, FIELD_ROLE, FIELD_USER},
        permission::Access,
    },
    error::{promotion::PromotionError, AppError},
    model::promotion::{AddBanParam, CreatePromotionParam, EndPromotionParam},
    service::promotion::embed::grant_summary_embed,
    util::time::discord_until,
};

/// Status view of a member, as shown after looking them up.
async fn status_message(
    actor: &Actor<'_>,
    user_id: u64,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let status = actor
        .state
        .promotions(actor.http)
        .user_status(actor.guild_id, user_id)
        .await?;

    Ok(CreateInteractionResponseMessage::new()
        .embed(panel::status_embed(&status))
        .components(panel::status_components(&status)))
}

/// Handles promotion buttons.
///
/// # Returns
/// - `Ok(Some(Response))` - Answer for the interaction
/// - `Ok(None)` - The id belongs to a modal, not a component
pub async fn handle_component(
    actor: &Actor<'_>,
    id: InteractionId,
) -> Result<Option<Response>, AppError> {
    if id != InteractionId::PromoteMenuGrant {
        actor.require(Access::Owner).await?;
    }

    let promotions = actor.state.promotions(actor.http);

    let response = match id {
        InteractionId::PromoteMenuGrant => Response::Modal(panel::grant_modal()),
        InteractionId::PromoteMenuEnd => Response::Modal(panel::end_modal()),
        InteractionId::PromoteMenuBan => Response::Modal(panel::ban_lookup_modal()),
        InteractionId::PromoteMenuList => {
            let grants = promotions.list_grants(actor.guild_id).await?;
            let bans = promotions.list_bans(actor.guild_id).await?;
            Response::Reply(
                CreateInteractionResponseMessage::new().embed(panel::grants_embed(&grants, &bans)),
            )
        }
        InteractionId::PromoteMenuLogs => {
            let entries = promotions
                .recent_logs(actor.guild_id, DEFAULT_LOG_COUNT)
                .await?;
            Response::Reply(CreateInteractionResponseMessage::new().embed(panel::logs_embed(&entries)))
        }
        InteractionId::PromoteBan(user_id) => Response::Modal(panel::ban_modal(user_id)),
        InteractionId::PromoteUnban(user_id) => {
            promotions
                .remove_promotion_ban(actor.guild_id, user_id, actor.user_id)
                .await?;
            Response::Update(status_message(actor, user_id).await?)
        }
        InteractionId::PromoteExtend(grant_id) => Response::Modal(panel::extend_modal(grant_id)),
        InteractionId::PromoteEnd(grant_id) => {
            let grant = promotions
                .find_grant_by_id(grant_id)
                .await?
                .filter(|g| g.guild_id == actor.guild_id)
                .ok_or(PromotionError::GrantNotFound)?;

            promotions
                .end_promotion(EndPromotionParam {
                    guild_id: actor.guild_id,
                    user_id: grant.user_id,
                    role_id: grant.role_id,
                    by_user_id: actor.user_id,
                    reason: String::new(),
                })
                .await?;
            Response::Update(status_message(actor, grant.user_id).await?)
        }
        _ => return Ok(None),
    };

    Ok(Some(response))
}

/// Handles promotion modal submissions.
pub async fn handle_modal(
    actor: &Actor<'_>,
    id: InteractionId,
    fields: &ModalFields,
) -> Result<Option<Response>, AppError> {
    if id != InteractionId::PromoteGrantModal {
        actor.require(Access::Owner).await?;
    }

    let promotions = actor.state.promotions(actor.http);

    let response = match id {
        InteractionId::PromoteGrantModal => {
            let grant = promotions
                .create_promotion(CreatePromotionParam {
                    guild_id: actor.guild_id,
                    target_id: fields.id(FIELD_USER)?,
                    role_id: fields.id(FIELD_ROLE)?,
                    granter_id: actor.user_id,
                    duration: fields.duration(FIELD_DURATION)?,
                    reason: fields.text(FIELD_REASON),
                })
                .await?;
            Response::Reply(
                CreateInteractionResponseMessage::new()
                    .embed(grant_summary_embed("Promotion granted", &grant)),
            )
        }
        InteractionId::PromoteEndModal => {
            let grant = promotions
                .end_promotion(EndPromotionParam {
                    guild_id: actor.guild_id,
                    user_id: fields.id(FIELD_USER)?,
                    role_id: fields.id(FIELD_ROLE)?,
                    by_user_id: actor.user_id,
                    reason: fields.text(FIELD_REASON),
                })
                .await?;
            Response::text(format!(
                "Ended <@{}>'s promotion to <@&{}>.",
                grant.user_id, grant.role_id
            ))
        }
        InteractionId::PromoteBanLookupModal => {
            Response::Reply(status_message(actor, fields.id(FIELD_USER)?).await?)
        }
        InteractionId::PromoteBanModal(user_id) => {
            let reason = fields.text(FIELD_REASON);
            if reason.is_empty() {
                return Err(AppError::BadRequest("A ban needs a reason.".to_string()));
            }

            let ban = promotions
                .add_promotion_ban(AddBanParam {
                    guild_id: actor.guild_id,
                    user_id,
                    by_user_id: actor.user_id,
                    duration: fields.duration(FIELD_DURATION)?,
                    reason,
                })
                .await?;
            Response::text(format!(
                "<@{}> is banned from promotions until {}.",
                user_id,
                discord_until(ban.end_time)
            ))
        }
        InteractionId::PromoteExtendModal(grant_id) => {
            let existing = promotions
                .find_grant_by_id(grant_id)
                .await?
                .filter(|g| g.guild_id == actor.guild_id)
                .ok_or(PromotionError::GrantNotFound)?;

            let grant = promotions
                .modify_promotion_duration(
                    existing.id,
                    fields.duration(FIELD_DURATION)?,
                    actor.user_id,
                )
                .await?;
            Response::Reply(
                CreateInteractionResponseMessage::new()
                    .embed(grant_summary_embed("Promotion duration changed", &grant)),
            )
        }
        _ => return Ok(None),
    };

    Ok(Some(response))
}
