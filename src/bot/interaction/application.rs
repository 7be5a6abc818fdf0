//! Reviewing admin applications.
//!
//! Approve opens a role picker for the reviewer; picking a role grants it permanently
//! and marks the review message decided. Reject asks for a reason in a modal and marks
//! the review message in place.

use serenity::all::{
    ChannelId, ComponentInteraction, ComponentInteractionDataKind,
    CreateInteractionResponseMessage, EditMessage, MessageId,
};

use crate::{
    bot::{
        interaction::{id::InteractionId, Actor, ModalFields, Response},
        panel::{self, FIELD_REASON},
        permission::Access,
    },
    error::{promotion::PromotionError, AppError},
    model::application::AdminApplication,
};

pub async fn handle_component(
    actor: &Actor<'_>,
    id: InteractionId,
    interaction: &ComponentInteraction,
) -> Result<Option<Response>, AppError> {
    actor.require(Access::Admin).await?;

    let applications = actor.state.applications(actor.http);

    let response = match id {
        InteractionId::AdminApprove(application_id) => {
            applications
                .find(&application_id)
                .await?
                .ok_or(PromotionError::ApplicationNotFound)?;

            Response::Reply(
                CreateInteractionResponseMessage::new()
                    .content("Pick the admin role to grant permanently.")
                    .components(panel::approve_role_select(&application_id)),
            )
        }
        InteractionId::AdminApproveRole(application_id) => {
            let ComponentInteractionDataKind::RoleSelect { values } = &interaction.data.kind else {
                return Ok(None);
            };
            let Some(role_id) = values.first() else {
                return Ok(None);
            };
            let role_id = role_id.get();

            let (application, grant) = applications
                .approve(&application_id, role_id, actor.user_id)
                .await?;

            mark_review_message(
                actor,
                &application,
                &format!("Approved by <@{}> with <@&{}>.", actor.user_id, grant.role_id),
            )
            .await;

            Response::Update(
                CreateInteractionResponseMessage::new()
                    .content(format!(
                        "<@{}> now holds <@&{}>.",
                        application.candidate_id, grant.role_id
                    ))
                    .components(Vec::new()),
            )
        }
        InteractionId::AdminReject(application_id) => {
            applications
                .find(&application_id)
                .await?
                .ok_or(PromotionError::ApplicationNotFound)?;

            Response::Modal(panel::reject_modal(&application_id))
        }
        _ => return Ok(None),
    };

    Ok(Some(response))
}

pub async fn handle_modal(
    actor: &Actor<'_>,
    id: InteractionId,
    fields: &ModalFields,
) -> Result<Option<Response>, AppError> {
    let InteractionId::AdminRejectModal(application_id) = id else {
        return Ok(None);
    };

    actor.require(Access::Admin).await?;

    let reason = fields.text(FIELD_REASON);
    let (application, cooldown) = actor
        .state
        .applications(actor.http)
        .reject(&application_id, actor.user_id, &reason)
        .await?;

    let mut outcome = format!(
        "Rejected by <@{}>. Can be nominated again <t:{}:R>.",
        actor.user_id,
        cooldown.until.timestamp()
    );
    if !reason.is_empty() {
        outcome.push_str(&format!("\nReason: {}", reason));
    }

    Ok(Some(Response::Update(
        CreateInteractionResponseMessage::new()
            .embed(panel::decided_application_embed(&application, &outcome, false))
            .components(Vec::new()),
    )))
}

/// Replaces the review message's buttons with the approval.
async fn mark_review_message(actor: &Actor<'_>, application: &AdminApplication, outcome: &str) {
    let (Some(channel_id), Some(message_id)) = (application.channel_id, application.message_id)
    else {
        return;
    };

    let edit = EditMessage::new()
        .embed(panel::decided_application_embed(application, outcome, true))
        .components(Vec::new());

    if let Err(e) = ChannelId::new(channel_id)
        .edit_message(actor.http, MessageId::new(message_id), edit)
        .await
    {
        tracing::warn!(
            "Failed to update review message of application {}: {}",
            application.id,
            e
        );
    }
}
