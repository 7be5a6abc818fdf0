//! Embeds, buttons, select menus and modals the bot posts.
//!
//! Every component carries an `InteractionId` as its custom id so the interaction
//! handlers can route it back.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateInputText,
    CreateModal, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle,
};

use crate::{
    bot::interaction::id::InteractionId,
    model::{
        application::AdminApplication,
        log::LogEntry,
        promotion::{PromotionBan, PromotionGrant, PromotionStatus},
        responsibility::Responsibility,
        settings::GuildSettings,
    },
    service::promotion::embed::{action_color, COLOR_GRANTED, COLOR_NEUTRAL, COLOR_REMOVED},
    util::time::{discord_relative, discord_until},
};

pub const FIELD_USER: &str = "user";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_DURATION: &str = "duration";
pub const FIELD_REASON: &str = "reason";
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";

const COLOR_PANEL: u32 = 0x5865f2;

/// Discord caps action rows per message and buttons per row at five.
const MAX_ROWS: usize = 5;
const MAX_BUTTONS_PER_ROW: usize = 5;
/// Discord caps select menu options and embed fields at 25.
const MAX_OPTIONS: usize = 25;

fn button(id: InteractionId, label: &str, style: ButtonStyle) -> CreateButton {
    CreateButton::new(id.to_string()).label(label).style(style)
}

fn input(style: InputTextStyle, label: &str, field: &str, required: bool) -> CreateActionRow {
    CreateActionRow::InputText(CreateInputText::new(style, label, field).required(required))
}

/// The promotion control panel posted by `promote setup`.
pub fn promotion_panel() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("Promotion panel")
        .color(COLOR_PANEL)
        .description(
            "Grant or end promotions, manage promotion bans, and review active grants and the \
             audit log.",
        );

    let buttons = vec![
        button(InteractionId::PromoteMenuGrant, "Grant", ButtonStyle::Success),
        button(InteractionId::PromoteMenuEnd, "End", ButtonStyle::Danger),
        button(InteractionId::PromoteMenuBan, "Bans", ButtonStyle::Secondary),
        button(InteractionId::PromoteMenuList, "Active", ButtonStyle::Primary),
        button(InteractionId::PromoteMenuLogs, "Logs", ButtonStyle::Primary),
    ];

    (embed, vec![CreateActionRow::Buttons(buttons)])
}

pub fn grant_modal() -> CreateModal {
    CreateModal::new(InteractionId::PromoteGrantModal.to_string(), "Grant promotion").components(
        vec![
            input(InputTextStyle::Short, "Member (mention or id)", FIELD_USER, true),
            input(InputTextStyle::Short, "Role (mention or id)", FIELD_ROLE, true),
            input(InputTextStyle::Short, "Duration (e.g. 7d or permanent)", FIELD_DURATION, true),
            input(InputTextStyle::Paragraph, "Reason", FIELD_REASON, false),
        ],
    )
}

pub fn end_modal() -> CreateModal {
    CreateModal::new(InteractionId::PromoteEndModal.to_string(), "End promotion").components(vec![
        input(InputTextStyle::Short, "Member (mention or id)", FIELD_USER, true),
        input(InputTextStyle::Short, "Role (mention or id)", FIELD_ROLE, true),
        input(InputTextStyle::Paragraph, "Reason", FIELD_REASON, false),
    ])
}

pub fn ban_lookup_modal() -> CreateModal {
    CreateModal::new(
        InteractionId::PromoteBanLookupModal.to_string(),
        "Look up member",
    )
    .components(vec![input(
        InputTextStyle::Short,
        "Member (mention or id)",
        FIELD_USER,
        true,
    )])
}

pub fn ban_modal(user_id: u64) -> CreateModal {
    CreateModal::new(
        InteractionId::PromoteBanModal(user_id).to_string(),
        "Ban from promotions",
    )
    .components(vec![
        input(InputTextStyle::Short, "Duration (e.g. 30d or permanent)", FIELD_DURATION, true),
        input(InputTextStyle::Paragraph, "Reason", FIELD_REASON, true),
    ])
}

pub fn extend_modal(grant_id: i32) -> CreateModal {
    CreateModal::new(
        InteractionId::PromoteExtendModal(grant_id).to_string(),
        "Change duration",
    )
    .components(vec![input(
        InputTextStyle::Short,
        "New duration from now (e.g. 3d or permanent)",
        FIELD_DURATION,
        true,
    )])
}

/// A member's grants, ban and activity.
pub fn status_embed(status: &PromotionStatus) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Promotion status")
        .color(if status.ban.is_some() {
            COLOR_REMOVED
        } else {
            COLOR_PANEL
        })
        .description(format!("<@{}>", status.user_id));

    let grants = if status.grants.is_empty() {
        "No active promotions".to_string()
    } else {
        status
            .grants
            .iter()
            .map(grant_line)
            .collect::<Vec<_>>()
            .join("\n")
    };
    embed = embed.field("Promotions", grants, false);

    if let Some(ban) = &status.ban {
        embed = embed.field("Banned from promotions", ban_line(ban), false);
    }

    embed = embed.field("Activity", status.stats.summary(), false);

    if !status.history.is_empty() {
        embed = embed.field("Recent history", history_lines(&status.history), false);
    }

    embed
}

/// Ban or unban button for the member, then change/end buttons for each grant.
pub fn status_components(status: &PromotionStatus) -> Vec<CreateActionRow> {
    let ban_button = match status.ban {
        Some(_) => button(
            InteractionId::PromoteUnban(status.user_id),
            "Unban",
            ButtonStyle::Secondary,
        ),
        None => button(
            InteractionId::PromoteBan(status.user_id),
            "Ban",
            ButtonStyle::Danger,
        ),
    };

    let mut rows = vec![CreateActionRow::Buttons(vec![ban_button])];

    for chunk in status.grants.chunks(MAX_BUTTONS_PER_ROW / 2) {
        if rows.len() == MAX_ROWS {
            break;
        }

        let buttons = chunk
            .iter()
            .flat_map(|grant| {
                [
                    button(
                        InteractionId::PromoteExtend(grant.id),
                        &format!("Change #{}", grant.id),
                        ButtonStyle::Primary,
                    ),
                    button(
                        InteractionId::PromoteEnd(grant.id),
                        &format!("End #{}", grant.id),
                        ButtonStyle::Danger,
                    ),
                ]
            })
            .collect();
        rows.push(CreateActionRow::Buttons(buttons));
    }

    rows
}

fn grant_line(grant: &PromotionGrant) -> String {
    format!(
        "`#{}` <@&{}> for {} (ends {})",
        grant.id,
        grant.role_id,
        grant.duration,
        discord_until(grant.end_time)
    )
}

fn ban_line(ban: &PromotionBan) -> String {
    format!(
        "Until {} by <@{}>: {}",
        discord_until(ban.end_time),
        ban.by_user_id,
        ban.reason
    )
}

/// Every active grant and ban of a guild.
pub fn grants_embed(grants: &[PromotionGrant], bans: &[PromotionBan]) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Active promotions")
        .color(COLOR_GRANTED);

    if grants.is_empty() {
        embed = embed.description("Nobody is currently promoted.");
    } else {
        let lines = grants
            .iter()
            .map(|g| format!("<@{}>: {}", g.user_id, grant_line(g)))
            .collect::<Vec<_>>();
        embed = embed.description(truncate_lines(&lines, 4000));
    }

    if !bans.is_empty() {
        let lines = bans
            .iter()
            .map(|b| format!("<@{}>: {}", b.user_id, ban_line(b)))
            .collect::<Vec<_>>();
        embed = embed.field("Bans", truncate_lines(&lines, 1000), false);
    }

    embed
}

/// The newest audit entries, newest first.
fn log_line(entry: &LogEntry) -> String {
    let role = entry
        .role_id
        .map(|id| format!(" <@&{}>", id))
        .unwrap_or_default();
    format!(
        "{} **{}** <@{}>{}",
        discord_relative(entry.created_at),
        entry.action.title(),
        entry.user_id,
        role
    )
}

/// Embed fields hold at most 1024 characters.
fn history_lines(entries: &[LogEntry]) -> String {
    let lines = entries.iter().map(log_line).collect::<Vec<_>>();
    truncate_lines(&lines, 1024)
}

pub fn logs_embed(entries: &[LogEntry]) -> CreateEmbed {
    let embed = CreateEmbed::new().title("Promotion log");

    let Some(newest) = entries.first() else {
        return embed
            .color(COLOR_NEUTRAL)
            .description("Nothing has been logged yet.");
    };

    let lines = entries.iter().map(log_line).collect::<Vec<_>>();

    embed
        .color(action_color(newest.action))
        .description(truncate_lines(&lines, 4000))
}

/// Settings and the promotable role allow-list.
pub fn settings_embed(settings: &GuildSettings, admin_roles: &[u64]) -> CreateEmbed {
    let channel = |id: Option<u64>| {
        id.map(|id| format!("<#{}>", id))
            .unwrap_or_else(|| "Not set".to_string())
    };
    let toggle = |on: bool| if on { "On" } else { "Off" };

    let roles = if admin_roles.is_empty() {
        "None yet. Add one with `promote roles add <role>`.".to_string()
    } else {
        admin_roles
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    CreateEmbed::new()
        .title("Promotion settings")
        .color(COLOR_PANEL)
        .field("Promotable roles", roles, false)
        .field("Log channel", channel(settings.log_channel_id), true)
        .field(
            "Applications channel",
            channel(settings.applications_channel_id),
            true,
        )
        .field(
            "Responsibilities channel",
            channel(settings.responsibilities_channel_id),
            true,
        )
        .field(
            "Suggestions channel",
            channel(settings.suggestions_channel_id),
            true,
        )
        .field(
            "Application cooldown",
            format!("{}h", settings.application_cooldown_hours),
            true,
        )
        .field(
            "Replace previous role",
            toggle(settings.replace_previous_role),
            true,
        )
        .field("DM notifications", toggle(settings.dm_notifications), true)
}

/// Joins lines, cutting off whole lines once `limit` characters are reached.
fn truncate_lines(lines: &[String], limit: usize) -> String {
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        if out.len() + line.len() + 1 > limit {
            out.push_str(&format!("…and {} more", lines.len() - i));
            break;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim_end().to_string()
}

pub fn application_components(id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        button(
            InteractionId::AdminApprove(id.to_string()),
            "Approve",
            ButtonStyle::Success,
        ),
        button(
            InteractionId::AdminReject(id.to_string()),
            "Reject",
            ButtonStyle::Danger,
        ),
    ])]
}

/// Role picker shown to the approver; the service checks the role is promotable.
pub fn approve_role_select(id: &str) -> Vec<CreateActionRow> {
    let menu = CreateSelectMenu::new(
        InteractionId::AdminApproveRole(id.to_string()).to_string(),
        CreateSelectMenuKind::Role {
            default_roles: None,
        },
    )
    .placeholder("Role to grant permanently")
    .min_values(1)
    .max_values(1);

    vec![CreateActionRow::SelectMenu(menu)]
}

pub fn reject_modal(id: &str) -> CreateModal {
    CreateModal::new(
        InteractionId::AdminRejectModal(id.to_string()).to_string(),
        "Reject application",
    )
    .components(vec![input(
        InputTextStyle::Paragraph,
        "Reason",
        FIELD_REASON,
        false,
    )])
}

/// Review embed of an application after it was decided.
pub fn decided_application_embed(
    application: &AdminApplication,
    outcome: &str,
    approved: bool,
) -> CreateEmbed {
    crate::service::application::application_embed(application)
        .color(if approved { COLOR_GRANTED } else { COLOR_REMOVED })
        .field("Decision", outcome, false)
}

/// The responsibilities panel posted by `resp setup`.
pub fn responsibility_panel(
    responsibilities: &[Responsibility],
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = crate::service::responsibility::embed::panel_embed(responsibilities);

    let mut rows = Vec::new();

    if !responsibilities.is_empty() {
        let options = responsibilities
            .iter()
            .take(MAX_OPTIONS)
            .map(|r| CreateSelectMenuOption::new(&r.name, r.id.to_string()))
            .collect();
        let menu = CreateSelectMenu::new(
            InteractionId::RespSelect.to_string(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Choose a responsibility");
        rows.push(CreateActionRow::SelectMenu(menu));
    }

    rows.push(CreateActionRow::Buttons(vec![button(
        InteractionId::RespSuggest,
        "Suggest a responsibility",
        ButtonStyle::Secondary,
    )]));

    (embed, rows)
}

pub fn responsibility_info_components(responsibility_id: i32) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![button(
        InteractionId::RespApply(responsibility_id),
        "Apply",
        ButtonStyle::Primary,
    )])]
}

pub fn apply_modal(responsibility: &Responsibility) -> CreateModal {
    let title = format!("Apply for {}", responsibility.name);
    let title: String = title.chars().take(45).collect();

    CreateModal::new(
        InteractionId::RespApplyModal(responsibility.id).to_string(),
        title,
    )
    .components(vec![input(
        InputTextStyle::Paragraph,
        "Why do you want this responsibility?",
        FIELD_REASON,
        true,
    )])
}

pub fn suggest_modal() -> CreateModal {
    CreateModal::new(
        InteractionId::RespSuggestModal.to_string(),
        "Suggest a responsibility",
    )
    .components(vec![
        input(InputTextStyle::Short, "Name", FIELD_NAME, true),
        input(InputTextStyle::Paragraph, "Description", FIELD_DESCRIPTION, false),
    ])
}

pub fn request_review_components(request_id: i32) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        button(
            InteractionId::RespRequestApprove(request_id),
            "Approve",
            ButtonStyle::Success,
        ),
        button(
            InteractionId::RespRequestReject(request_id),
            "Reject",
            ButtonStyle::Danger,
        ),
    ])]
}
