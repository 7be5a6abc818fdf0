//! Who may run which command or press which button.

use crate::{
    bot::command::Command, config::Config, error::command::CommandError,
    service::discord::GuildRoster,
};

/// Access level of a user within one guild, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Access {
    Member,
    /// Holds a role with the Administrator permission.
    Admin,
    /// A configured bot owner or the guild owner.
    Owner,
}

impl Access {
    pub fn resolve(config: &Config, roster: &GuildRoster, user_id: u64, role_ids: &[u64]) -> Self {
        if config.is_bot_owner(user_id) || roster.owner_id == user_id {
            Self::Owner
        } else if roster.is_administrator(role_ids) {
            Self::Admin
        } else {
            Self::Member
        }
    }

    /// Fails with `Forbidden` unless the level is at least `required`.
    pub fn require(self, required: Access) -> Result<(), CommandError> {
        if self >= required {
            Ok(())
        } else {
            Err(CommandError::Forbidden)
        }
    }
}

impl Command {
    /// Lowest access level allowed to run the command.
    pub fn required_access(&self) -> Access {
        if self.is_owner_only() {
            Access::Owner
        } else if self.requires_admin() {
            Access::Admin
        } else {
            Access::Member
        }
    }
}
