//! Responsibility panel, applications, suggestions and their review.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, CreateInteractionResponseMessage,
    CreateMessage,
};

use crate::{
    bot::{
        interaction::{id::InteractionId, Actor, ModalFields, Response},
        panel::{self, FIELD_DESCRIPTION, FIELD_NAME, FIELD_REASON},
        permission::Access,
    },
    error::AppError,
    model::{responsibility::ResponsibilityRequest, settings::SettingsChannel},
    service::{
        responsibility::embed::{decided_review_embed, info_embed, review_embed},
        settings::SettingsService,
    },
    state::AppState,
};

fn missing() -> AppError {
    AppError::NotFound("That responsibility no longer exists.".to_string())
}

pub async fn handle_component(
    actor: &Actor<'_>,
    id: InteractionId,
    interaction: &ComponentInteraction,
) -> Result<Option<Response>, AppError> {
    let service = actor.state.responsibilities(actor.http);

    let response = match id {
        InteractionId::RespSelect => {
            let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind
            else {
                return Ok(None);
            };
            let Some(responsibility_id) = values.first().and_then(|v| v.parse::<i32>().ok())
            else {
                return Ok(None);
            };

            let responsibility = service
                .get_by_id(responsibility_id)
                .await?
                .ok_or_else(missing)?;

            Response::Reply(
                CreateInteractionResponseMessage::new()
                    .embed(info_embed(&responsibility))
                    .components(panel::responsibility_info_components(responsibility.id)),
            )
        }
        InteractionId::RespApply(responsibility_id) => {
            let responsibility = service
                .get_by_id(responsibility_id)
                .await?
                .ok_or_else(missing)?;

            Response::Modal(panel::apply_modal(&responsibility))
        }
        InteractionId::RespSuggest => Response::Modal(panel::suggest_modal()),
        InteractionId::RespRequestApprove(request_id) => {
            actor.require(Access::Admin).await?;

            let (request, responsibility) =
                service.approve_request(request_id, actor.user_id).await?;

            Response::Update(decided(&request, &responsibility.name))
        }
        InteractionId::RespRequestReject(request_id) => {
            actor.require(Access::Admin).await?;

            let request = service.reject_request(request_id, actor.user_id).await?;
            let name = match request.responsibility_id {
                Some(id) => service
                    .get_by_id(id)
                    .await?
                    .map(|r| r.name)
                    .unwrap_or_default(),
                None => request.suggested_name.clone().unwrap_or_default(),
            };

            Response::Update(decided(&request, &name))
        }
        _ => return Ok(None),
    };

    Ok(Some(response))
}

fn decided(request: &ResponsibilityRequest, name: &str) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(decided_review_embed(request, name))
        .components(Vec::new())
}

pub async fn handle_modal(
    actor: &Actor<'_>,
    id: InteractionId,
    fields: &ModalFields,
) -> Result<Option<Response>, AppError> {
    let service = actor.state.responsibilities(actor.http);

    let response = match id {
        InteractionId::RespApplyModal(responsibility_id) => {
            let (responsibility, request) = service
                .apply(responsibility_id, actor.user_id, &fields.text(FIELD_REASON))
                .await?;

            post_for_review(actor, SettingsChannel::Responsibilities, &request, &responsibility.name)
                .await?;

            Response::text(format!(
                "Your application for **{}** was sent for review.",
                responsibility.name
            ))
        }
        InteractionId::RespSuggestModal => {
            let name = fields.text(FIELD_NAME);
            let request = service
                .suggest(
                    actor.guild_id,
                    actor.user_id,
                    &name,
                    &fields.text(FIELD_DESCRIPTION),
                )
                .await?;

            let suggested = request.suggested_name.clone().unwrap_or(name);
            post_for_review(actor, SettingsChannel::Suggestions, &request, &suggested).await?;

            Response::text(format!(
                "Your suggestion **{}** was sent for review.",
                suggested
            ))
        }
        _ => return Ok(None),
    };

    Ok(Some(response))
}

/// Posts a request's review embed to the configured channel, or where the panel is.
///
/// The request stays pending even if posting fails.
async fn post_for_review(
    actor: &Actor<'_>,
    channel: SettingsChannel,
    request: &ResponsibilityRequest,
    name: &str,
) -> Result<(), AppError> {
    let settings = SettingsService::new(&actor.state.db)
        .get(actor.guild_id)
        .await?;
    let channel_id = match channel {
        SettingsChannel::Suggestions => settings.suggestions_channel_id,
        _ => settings.responsibilities_channel_id,
    }
    .unwrap_or(actor.channel_id);

    let message = CreateMessage::new()
        .embed(review_embed(request, name))
        .components(panel::request_review_components(request.id));

    match AppState::gateway(actor.http)
        .send_message(channel_id, message)
        .await
    {
        Ok(message_id) => {
            actor
                .state
                .responsibilities(actor.http)
                .attach_request_message(request.id, channel_id, message_id)
                .await?;
        }
        Err(e) => {
            tracing::warn!(
                "Failed to post request {} to channel {}: {}",
                request.id,
                channel_id,
                e
            );
        }
    }

    Ok(())
}
