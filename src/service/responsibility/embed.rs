use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::model::responsibility::{
    RequestKind, RequestStatus, Responsibility, ResponsibilityRequest,
};

const COLOR_PANEL: u32 = 0x5865f2;
const COLOR_REVIEW: u32 = 0xf1c40f;
const COLOR_APPROVED: u32 = 0x2ecc71;
const COLOR_REJECTED: u32 = 0xe74c3c;

/// Embed of the responsibilities panel listing every responsibility and who holds it.
pub fn panel_embed(responsibilities: &[Responsibility]) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Responsibilities")
        .color(COLOR_PANEL)
        .description(
            "Pick a responsibility below to read about it and apply, or suggest a new one.",
        );

    if responsibilities.is_empty() {
        return embed.field("No responsibilities yet", "Suggest the first one!", false);
    }

    // Discord allows at most 25 fields per embed.
    for responsibility in responsibilities.iter().take(25) {
        embed = embed.field(
            &responsibility.name,
            responsibility.responsible_mentions(),
            false,
        );
    }

    embed
}

/// Detailed view of one responsibility.
pub fn info_embed(responsibility: &Responsibility) -> CreateEmbed {
    let description = if responsibility.description.is_empty() {
        "No description yet.".to_string()
    } else {
        responsibility.description.clone()
    };

    let mut embed = CreateEmbed::new()
        .title(&responsibility.name)
        .color(COLOR_PANEL)
        .description(description)
        .field("Responsible", responsibility.responsible_mentions(), false);

    if !responsibility.role_ids.is_empty() {
        let roles = responsibility
            .role_ids
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(", ");
        embed = embed.field("Roles", roles, false);
    }

    if let Some(shortcut) = &responsibility.mention_shortcut {
        embed = embed.field("Shortcut", format!("`{}`", shortcut), true);
    }

    if let Some(url) = &responsibility.image_url {
        embed = embed.image(url);
    }

    embed.footer(CreateEmbedFooter::new(format!(
        "Order {}",
        responsibility.sort_order
    )))
}

/// Review embed posted for a pending application or suggestion.
pub fn review_embed(request: &ResponsibilityRequest, name: &str) -> CreateEmbed {
    let (title, description) = match request.kind {
        RequestKind::Apply => (
            "Responsibility application",
            format!("<@{}> wants to take on **{}**.", request.user_id, name),
        ),
        RequestKind::Suggest => (
            "Responsibility suggestion",
            format!("<@{}> suggests a new responsibility **{}**.", request.user_id, name),
        ),
    };

    let mut embed = CreateEmbed::new()
        .title(title)
        .color(COLOR_REVIEW)
        .description(description)
        .footer(CreateEmbedFooter::new(format!("Request {}", request.id)))
        .timestamp(Timestamp::from(request.created_at));

    if !request.content.is_empty() {
        embed = embed.field(
            match request.kind {
                RequestKind::Apply => "Why",
                RequestKind::Suggest => "Description",
            },
            &request.content,
            false,
        );
    }

    embed
}

/// Review embed after a decision, replacing the pending one.
pub fn decided_review_embed(request: &ResponsibilityRequest, name: &str) -> CreateEmbed {
    let approved = request.status == RequestStatus::Approved;
    let by = request
        .decided_by
        .map(|id| format!("<@{}>", id))
        .unwrap_or_else(|| "Unknown".to_string());

    review_embed(request, name)
        .color(if approved { COLOR_APPROVED } else { COLOR_REJECTED })
        .field(
            if approved { "Approved by" } else { "Rejected by" },
            by,
            false,
        )
}

/// Direct message telling a requester how their request was decided.
pub fn decision_dm_embed(request: &ResponsibilityRequest, name: &str) -> CreateEmbed {
    let approved = request.status == RequestStatus::Approved;
    let description = match (request.kind, approved) {
        (RequestKind::Apply, true) => format!("You are now responsible for **{}**.", name),
        (RequestKind::Apply, false) => {
            format!("Your application for **{}** was not accepted.", name)
        }
        (RequestKind::Suggest, true) => {
            format!("Your suggested responsibility **{}** was added.", name)
        }
        (RequestKind::Suggest, false) => {
            format!("Your suggested responsibility **{}** was not accepted.", name)
        }
    };

    CreateEmbed::new()
        .title(if approved {
            "Request approved"
        } else {
            "Request rejected"
        })
        .color(if approved { COLOR_APPROVED } else { COLOR_REJECTED })
        .description(description)
}
