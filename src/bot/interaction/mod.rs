//! Button, select menu and modal handling.
//!
//! Every incoming component or modal submission is parsed into an `InteractionId` and
//! routed to the handler for its feature:
//! - `promote` - Promotion panel, member status actions and their modals
//! - `application` - Reviewing admin applications
//! - `responsibility` - Responsibility panel, applications, suggestions and their review
//!
//! Handlers return a `Response`; errors are answered with an ephemeral message built from
//! `AppError::user_message`.

pub mod application;
pub mod id;
pub mod promote;
pub mod responsibility;

use serenity::all::{
    ActionRow, ActionRowComponent, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateModal, Interaction, Member, ModalInteraction,
};
use serenity::http::Http;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    bot::permission::Access,
    error::{command::CommandError, AppError},
    model::duration::PromotionDuration,
    state::AppState,
    util::parse::parse_mention_id,
};

use self::id::InteractionId;

/// How to answer an interaction.
pub enum Response {
    /// Reply only the clicking user can see.
    Reply(CreateInteractionResponseMessage),
    /// Replace the message the component is attached to.
    Update(CreateInteractionResponseMessage),
    Modal(CreateModal),
}

impl Response {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Reply(CreateInteractionResponseMessage::new().content(content))
    }

    fn into_builder(self) -> CreateInteractionResponse {
        match self {
            Self::Reply(message) => CreateInteractionResponse::Message(message.ephemeral(true)),
            Self::Update(message) => CreateInteractionResponse::UpdateMessage(message),
            Self::Modal(modal) => CreateInteractionResponse::Modal(modal),
        }
    }
}

/// The user behind an interaction and where it happened.
pub struct Actor<'a> {
    pub state: &'a AppState,
    pub http: &'a Arc<Http>,
    pub guild_id: u64,
    pub channel_id: u64,
    pub user_id: u64,
    pub role_ids: Vec<u64>,
}

impl<'a> Actor<'a> {
    fn new(
        state: &'a AppState,
        http: &'a Arc<Http>,
        guild_id: u64,
        channel_id: u64,
        user_id: u64,
        member: Option<&Member>,
    ) -> Self {
        Self {
            state,
            http,
            guild_id,
            channel_id,
            user_id,
            role_ids: member
                .map(|m| m.roles.iter().map(|r| r.get()).collect())
                .unwrap_or_default(),
        }
    }

    /// Fails with `Forbidden` unless the user has at least `required` access.
    pub async fn require(&self, required: Access) -> Result<(), AppError> {
        if required == Access::Member {
            return Ok(());
        }

        let roster = AppState::gateway(self.http)
            .guild_roster(self.guild_id)
            .await?;
        Access::resolve(&self.state.config, &roster, self.user_id, &self.role_ids)
            .require(required)?;

        Ok(())
    }
}

/// Text inputs of a submitted modal, keyed by field id.
pub struct ModalFields(HashMap<String, String>);

impl ModalFields {
    pub fn from_rows(rows: &[ActionRow]) -> Self {
        let fields = rows
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => Some((
                    input.custom_id.clone(),
                    input.value.clone().unwrap_or_default(),
                )),
                _ => None,
            })
            .collect();

        Self(fields)
    }

    /// Trimmed value of a field; empty if the field was left blank or is missing.
    pub fn text(&self, field: &str) -> String {
        self.0
            .get(field)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// A user or role given as a mention or raw id.
    pub fn id(&self, field: &'static str) -> Result<u64, CommandError> {
        let value = self.text(field);
        parse_mention_id(&value).ok_or(CommandError::InvalidArgument(field, value))
    }

    pub fn duration(&self, field: &'static str) -> Result<PromotionDuration, CommandError> {
        let value = self.text(field);
        PromotionDuration::parse(&value).map_err(|_| CommandError::InvalidArgument(field, value))
    }
}

pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Component(component) => handle_component(state, &ctx, component).await,
        Interaction::Modal(modal) => handle_modal(state, &ctx, modal).await,
        _ => {}
    }
}

async fn handle_component(state: &AppState, ctx: &Context, interaction: ComponentInteraction) {
    let Some(id) = InteractionId::parse(&interaction.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", interaction.data.custom_id);
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        return;
    };

    let actor = Actor::new(
        state,
        &ctx.http,
        guild_id.get(),
        interaction.channel_id.get(),
        interaction.user.id.get(),
        interaction.member.as_ref(),
    );

    let result = match &id {
        InteractionId::AdminApprove(_)
        | InteractionId::AdminApproveRole(_)
        | InteractionId::AdminReject(_) => {
            application::handle_component(&actor, id.clone(), &interaction).await
        }
        InteractionId::RespSelect
        | InteractionId::RespApply(_)
        | InteractionId::RespSuggest
        | InteractionId::RespRequestApprove(_)
        | InteractionId::RespRequestReject(_) => {
            responsibility::handle_component(&actor, id.clone(), &interaction).await
        }
        _ => promote::handle_component(&actor, id.clone()).await,
    };

    let response = match result {
        Ok(Some(response)) => response,
        Ok(None) => {
            tracing::debug!("Component {} arrived where a modal was expected", id);
            return;
        }
        Err(e) => Response::text(e.user_message()),
    };

    if let Err(e) = interaction
        .create_response(&ctx.http, response.into_builder())
        .await
    {
        tracing::warn!("Failed to answer component {}: {}", id, e);
    }
}

async fn handle_modal(state: &AppState, ctx: &Context, interaction: ModalInteraction) {
    let Some(id) = InteractionId::parse(&interaction.data.custom_id) else {
        tracing::debug!("Ignoring unknown modal {}", interaction.data.custom_id);
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        return;
    };

    let actor = Actor::new(
        state,
        &ctx.http,
        guild_id.get(),
        interaction.channel_id.get(),
        interaction.user.id.get(),
        interaction.member.as_ref(),
    );
    let fields = ModalFields::from_rows(&interaction.data.components);

    let result = match &id {
        InteractionId::AdminRejectModal(_) => {
            application::handle_modal(&actor, id.clone(), &fields).await
        }
        InteractionId::RespApplyModal(_) | InteractionId::RespSuggestModal => {
            responsibility::handle_modal(&actor, id.clone(), &fields).await
        }
        _ => promote::handle_modal(&actor, id.clone(), &fields).await,
    };

    let response = match result {
        Ok(Some(response)) => response,
        Ok(None) => {
            tracing::debug!("Modal submission with non-modal id {}", id);
            return;
        }
        Err(e) => Response::text(e.user_message()),
    };

    if let Err(e) = interaction
        .create_response(&ctx.http, response.into_builder())
        .await
    {
        tracing::warn!("Failed to answer modal {}: {}", id, e);
    }
}
