use serenity::all::{
    ChannelId, CreateMessage, GuildId, Member, PartialGuild, Permissions, Role, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::{Http, HttpError};
use std::sync::Arc;

use crate::error::AppError;

/// The parts of a Discord role the hierarchy checks need.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSnapshot {
    pub id: u64,
    pub name: String,
    pub position: i16,
    pub permissions: Permissions,
}

impl From<&Role> for RoleSnapshot {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            position: role.position as i16,
            permissions: role.permissions,
        }
    }
}

/// A guild's owner and role list at the time it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRoster {
    pub guild_id: u64,
    pub name: String,
    pub owner_id: u64,
    pub roles: Vec<RoleSnapshot>,
}

impl From<&PartialGuild> for GuildRoster {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            owner_id: guild.owner_id.get(),
            roles: guild.roles.values().map(RoleSnapshot::from).collect(),
        }
    }
}

impl GuildRoster {
    pub fn role(&self, role_id: u64) -> Option<&RoleSnapshot> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Highest position among the given roles.
    ///
    /// Members with no roles sit at the @everyone position of 0. Unknown role ids are
    /// ignored.
    pub fn top_position(&self, role_ids: &[u64]) -> i16 {
        role_ids
            .iter()
            .filter_map(|id| self.role(*id))
            .map(|r| r.position)
            .max()
            .unwrap_or(0)
    }

    /// Highest position among the given roles, leaving `excluded` out.
    pub fn top_position_excluding(&self, role_ids: &[u64], excluded: u64) -> i16 {
        let remaining: Vec<u64> = role_ids.iter().copied().filter(|id| *id != excluded).collect();
        self.top_position(&remaining)
    }

    /// Permissions granted by the given roles plus @everyone.
    pub fn permissions(&self, role_ids: &[u64]) -> Permissions {
        self.roles
            .iter()
            .filter(|r| r.id == self.guild_id || role_ids.contains(&r.id))
            .fold(Permissions::empty(), |acc, r| acc | r.permissions)
    }

    pub fn is_administrator(&self, role_ids: &[u64]) -> bool {
        self.permissions(role_ids).contains(Permissions::ADMINISTRATOR)
    }

    /// Whether the given roles allow assigning and removing roles.
    pub fn can_manage_roles(&self, role_ids: &[u64]) -> bool {
        let permissions = self.permissions(role_ids);
        permissions.contains(Permissions::ADMINISTRATOR)
            || permissions.contains(Permissions::MANAGE_ROLES)
    }
}

/// The parts of a guild member the services need.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSnapshot {
    pub user_id: u64,
    pub role_ids: Vec<u64>,
    pub is_bot: bool,
}

impl From<&Member> for MemberSnapshot {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            role_ids: member.roles.iter().map(|r| r.get()).collect(),
            is_bot: member.user.bot,
        }
    }
}

impl MemberSnapshot {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// Discord operations the services perform.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Fetches the guild's owner and roles.
    async fn guild_roster(&self, guild_id: u64) -> Result<GuildRoster, AppError>;

    /// Fetches a guild member.
    ///
    /// # Returns
    /// - `Ok(Some(MemberSnapshot))` - The member is in the guild
    /// - `Ok(None)` - The user is not a member of the guild
    /// - `Err(AppError)` - Discord request failed
    async fn member(&self, guild_id: u64, user_id: u64)
        -> Result<Option<MemberSnapshot>, AppError>;

    /// The bot's own user id.
    async fn current_user_id(&self) -> Result<u64, AppError>;

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Sends a direct message to a user.
    async fn send_dm(&self, user_id: u64, message: CreateMessage) -> Result<(), AppError>;

    /// Posts a message to a channel and returns the new message's id.
    async fn send_message(&self, channel_id: u64, message: CreateMessage)
        -> Result<u64, AppError>;
}

/// `DiscordGateway` backed by the bot's serenity HTTP client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a serenity error is Discord answering 404 Not Found.
fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(resp))
            if resp.status_code.as_u16() == 404
    )
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn guild_roster(&self, guild_id: u64) -> Result<GuildRoster, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(GuildRoster::from(&guild))
    }

    async fn member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberSnapshot>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(MemberSnapshot::from(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn current_user_id(&self) -> Result<u64, AppError> {
        let user = self.http.get_current_user().await?;

        Ok(user.id.get())
    }

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn send_dm(&self, user_id: u64, message: CreateMessage) -> Result<(), AppError> {
        UserId::new(user_id)
            .direct_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: CreateMessage,
    ) -> Result<u64, AppError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(sent.id.get())
    }
}
