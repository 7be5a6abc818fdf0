//! `resp` subcommands.

use serenity::all::{CreateEmbedFooter, CreateMessage};

use crate::{
    bot::{
        command::{Invocation, RespCommand},
        panel,
    },
    error::AppError,
    service::responsibility::embed::{info_embed, panel_embed},
};

fn text(content: impl Into<String>) -> CreateMessage {
    CreateMessage::new().content(content)
}

pub async fn run(inv: &Invocation<'_>, command: RespCommand) -> Result<CreateMessage, AppError> {
    let service = inv.state.responsibilities(inv.http);
    let guild_id = inv.guild_id;

    let reply = match command {
        RespCommand::Setup => {
            let list = service.list(guild_id).await?;
            let (embed, components) = panel::responsibility_panel(&list);
            CreateMessage::new().embed(embed).components(components)
        }
        RespCommand::List => {
            let mut embed = panel_embed(&service.list(guild_id).await?);
            let pending = service.pending_requests(guild_id).await?.len();
            if pending > 0 {
                embed = embed.footer(CreateEmbedFooter::new(format!(
                    "{} request(s) awaiting review",
                    pending
                )));
            }
            CreateMessage::new().embed(embed)
        }
        RespCommand::Info(name) => {
            let responsibility = service
                .get_by_name(guild_id, &name)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("No responsibility named `{}`.", name)))?;
            CreateMessage::new()
                .embed(info_embed(&responsibility))
                .components(panel::responsibility_info_components(responsibility.id))
        }
        RespCommand::Add { name, description } => {
            let created = service.create(guild_id, &name, &description).await?;
            text(format!("Added responsibility `{}`.", created.name))
        }
        RespCommand::Remove(name) => {
            let deleted = service.delete(guild_id, &name).await?;
            text(format!("Removed responsibility `{}`.", deleted.name))
        }
        RespCommand::Desc { name, description } => {
            let updated = service.set_description(guild_id, &name, &description).await?;
            text(format!("Updated the description of `{}`.", updated.name))
        }
        RespCommand::Order { name, sort_order } => {
            let updated = service.set_order(guild_id, &name, sort_order).await?;
            text(format!("`{}` now sorts at {}.", updated.name, updated.sort_order))
        }
        RespCommand::Image { name, url } => {
            let updated = service.set_image(guild_id, &name, url).await?;
            match updated.image_url {
                Some(_) => text(format!("Updated the image of `{}`.", updated.name)),
                None => text(format!("Removed the image of `{}`.", updated.name)),
            }
        }
        RespCommand::Shortcut { name, word } => {
            let updated = service.set_shortcut(guild_id, &name, word).await?;
            match updated.mention_shortcut {
                Some(word) => text(format!(
                    "Messages starting with `{}` now ping the people responsible for `{}`.",
                    word, updated.name
                )),
                None => text(format!("Removed the shortcut of `{}`.", updated.name)),
            }
        }
        RespCommand::Assign { name, user_id } => {
            let updated = service.add_responsible(guild_id, &name, user_id).await?;
            text(format!("<@{}> is now responsible for `{}`.", user_id, updated.name))
        }
        RespCommand::Unassign { name, user_id } => {
            let updated = service.remove_responsible(guild_id, &name, user_id).await?;
            text(format!(
                "<@{}> is no longer responsible for `{}`.",
                user_id, updated.name
            ))
        }
        RespCommand::AddRole { name, role_id } => {
            let updated = service.add_role(guild_id, &name, role_id).await?;
            text(format!(
                "People responsible for `{}` now get <@&{}>.",
                updated.name, role_id
            ))
        }
        RespCommand::RemoveRole { name, role_id } => {
            let updated = service.remove_role(guild_id, &name, role_id).await?;
            text(format!(
                "<@&{}> is no longer tied to `{}`.",
                role_id, updated.name
            ))
        }
    };

    Ok(reply)
}
