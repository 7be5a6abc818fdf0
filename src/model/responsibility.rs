//! Responsibility registry domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{parse_optional_snowflake, parse_snowflake};

/// A named area of responsibility with the members who hold it.
#[derive(Debug, Clone, PartialEq)]
pub struct Responsibility {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub description: String,
    /// Display position in lists; lower comes first.
    pub sort_order: i32,
    pub image_url: Option<String>,
    /// Word that, sent as the first token of a message, pings the responsibles.
    pub mention_shortcut: Option<String>,
    /// Discord IDs of the members holding this responsibility.
    pub responsibles: Vec<u64>,
    /// Discord roles granted to responsibles.
    pub role_ids: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

impl Responsibility {
    /// Converts an entity model and its related rows to a domain model.
    pub fn from_entity(
        entity: entity::responsibility::Model,
        members: Vec<entity::responsibility_member::Model>,
        roles: Vec<entity::responsibility_role::Model>,
    ) -> Result<Self, DbErr> {
        let responsibles = members
            .iter()
            .map(|m| parse_snowflake(&m.user_id, "user_id"))
            .collect::<Result<Vec<_>, _>>()?;
        let role_ids = roles
            .iter()
            .map(|r| parse_snowflake(&r.role_id, "role_id"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            name: entity.name,
            description: entity.description,
            sort_order: entity.sort_order,
            image_url: entity.image_url,
            mention_shortcut: entity.mention_shortcut,
            responsibles,
            role_ids,
            created_at: entity.created_at,
        })
    }

    /// Mentions of every responsible, or a placeholder when nobody holds it.
    pub fn responsible_mentions(&self) -> String {
        if self.responsibles.is_empty() {
            return "Nobody yet".to_string();
        }

        self.responsibles
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Whether a request asks to join a responsibility or proposes a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Apply,
    Suggest,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Suggest => "suggest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "apply" => Some(Self::Apply),
            "suggest" => Some(Self::Suggest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// An application to a responsibility or a suggestion for a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsibilityRequest {
    pub id: i32,
    pub guild_id: u64,
    pub kind: RequestKind,
    /// Target responsibility for applications.
    pub responsibility_id: Option<i32>,
    pub user_id: u64,
    /// Proposed name for suggestions.
    pub suggested_name: Option<String>,
    /// Applicant's motivation or the suggested description.
    pub content: String,
    pub status: RequestStatus,
    /// Where the review embed was posted.
    pub channel_id: Option<u64>,
    pub message_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub decided_by: Option<u64>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl ResponsibilityRequest {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::responsibility_request::Model) -> Result<Self, DbErr> {
        let kind = RequestKind::parse(&entity.kind)
            .ok_or_else(|| DbErr::Custom(format!("Unknown request kind: {}", entity.kind)))?;
        let status = RequestStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown request status: {}", entity.status)))?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            kind,
            responsibility_id: entity.responsibility_id,
            user_id: parse_snowflake(&entity.user_id, "user_id")?,
            suggested_name: entity.suggested_name,
            content: entity.content,
            status,
            channel_id: parse_optional_snowflake(entity.channel_id, "channel_id")?,
            message_id: parse_optional_snowflake(entity.message_id, "message_id")?,
            created_at: entity.created_at,
            decided_by: parse_optional_snowflake(entity.decided_by, "decided_by")?,
            decided_at: entity.decided_at,
        })
    }
}

/// Editable fields of a responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsibilityUpdate {
    Description(String),
    SortOrder(i32),
    ImageUrl(Option<String>),
    MentionShortcut(Option<String>),
}
