use serenity::all::CreateMessage;

use crate::{
    bot::{command::Invocation, panel},
    error::AppError,
    service::{application::application_embed, settings::SettingsService},
};

/// Nominates a member and posts the application for review.
///
/// The review embed goes to the guild's applications channel, or the invoking channel when
/// none is set. If the post fails the application is withdrawn and the error is returned.
pub async fn run(inv: &Invocation<'_>, candidate_id: u64) -> Result<CreateMessage, AppError> {
    let applications = inv.state.applications(inv.http);
    let application = applications
        .submit(inv.guild_id, candidate_id, inv.user_id)
        .await?;

    let channel_id = SettingsService::new(&inv.state.db)
        .get(inv.guild_id)
        .await?
        .applications_channel_id
        .unwrap_or(inv.channel_id);

    let review = CreateMessage::new()
        .embed(application_embed(&application))
        .components(panel::application_components(&application.id));

    applications
        .post_for_review(&application, channel_id, review)
        .await?;

    Ok(CreateMessage::new().content(format!(
        "<@{}> was nominated for admin. Application `{}` is waiting for review.",
        candidate_id, application.id
    )))
}
