//! Service tests against an in-memory Discord.
//!
//! `FakeGateway` implements `DiscordGateway` over a fixed guild so the promotion lifecycle
//! can be exercised end to end with a real SQLite database and no network.

use serenity::all::{CreateMessage, Permissions};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    error::AppError,
    service::discord::{gateway::RoleSnapshot, DiscordGateway, GuildRoster, MemberSnapshot},
};

mod promotion;

pub const GUILD: u64 = 1000;
pub const OWNER: u64 = 1;
pub const BOT: u64 = 2;
pub const GRANTER: u64 = 3;
pub const TARGET: u64 = 4;
pub const LOW_GRANTER: u64 = 5;
pub const BOT_USER: u64 = 6;

/// Bot's own role at position 50 with Manage Roles.
pub const BOT_ROLE: u64 = 900;
/// Granter's role at position 20.
pub const SENIOR_ROLE: u64 = 200;
/// Role being granted in most tests, position 10.
pub const ADMIN_ROLE: u64 = 100;
/// Low granter's role at position 9.
pub const HELPER_ROLE: u64 = 90;
/// Target's current admin role at position 5.
pub const JUNIOR_ROLE: u64 = 50;
/// Role above the bot at position 60.
pub const TOP_ROLE: u64 = 950;

pub fn guild_str() -> String {
    GUILD.to_string()
}

/// In-memory Discord guild.
pub struct FakeGateway {
    roster: GuildRoster,
    members: Mutex<HashMap<u64, MemberSnapshot>>,
    /// `(user_id, role_id)` pairs removed by the bot, in order.
    pub removed: Mutex<Vec<(u64, u64)>>,
    /// Users that were sent a DM, in order.
    pub dms: Mutex<Vec<u64>>,
    /// Channels that were posted to, in order.
    pub posts: Mutex<Vec<u64>>,
    fail_role_changes: AtomicBool,
    fail_posts: AtomicBool,
    next_message_id: AtomicU64,
}

fn simulated_failure() -> AppError {
    serenity::Error::Other("simulated Discord failure").into()
}

impl FakeGateway {
    /// A guild with the bot, a granter at 20, a low granter at 9, a target holding the
    /// junior admin role at 5, and a bot account without roles.
    pub fn standard() -> Arc<Self> {
        let role = |id: u64, name: &str, position: i16, permissions: Permissions| RoleSnapshot {
            id,
            name: name.to_string(),
            position,
            permissions,
        };

        let roster = GuildRoster {
            guild_id: GUILD,
            name: "Test Guild".to_string(),
            owner_id: OWNER,
            roles: vec![
                role(GUILD, "@everyone", 0, Permissions::empty()),
                role(BOT_ROLE, "Rolekeeper", 50, Permissions::MANAGE_ROLES),
                role(TOP_ROLE, "Owner", 60, Permissions::ADMINISTRATOR),
                role(SENIOR_ROLE, "Senior Admin", 20, Permissions::empty()),
                role(ADMIN_ROLE, "Admin", 10, Permissions::empty()),
                role(HELPER_ROLE, "Helper", 9, Permissions::empty()),
                role(JUNIOR_ROLE, "Junior Admin", 5, Permissions::empty()),
            ],
        };

        let gateway = Self {
            roster,
            members: Mutex::new(HashMap::new()),
            removed: Mutex::new(Vec::new()),
            dms: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
            fail_role_changes: AtomicBool::new(false),
            fail_posts: AtomicBool::new(false),
            next_message_id: AtomicU64::new(5000),
        };

        gateway.add_member(OWNER, &[], false);
        gateway.add_member(BOT, &[BOT_ROLE], true);
        gateway.add_member(GRANTER, &[SENIOR_ROLE], false);
        gateway.add_member(LOW_GRANTER, &[HELPER_ROLE], false);
        gateway.add_member(TARGET, &[JUNIOR_ROLE], false);
        gateway.add_member(BOT_USER, &[], true);

        Arc::new(gateway)
    }

    pub fn add_member(&self, user_id: u64, role_ids: &[u64], is_bot: bool) {
        self.members.lock().unwrap().insert(
            user_id,
            MemberSnapshot {
                user_id,
                role_ids: role_ids.to_vec(),
                is_bot,
            },
        );
    }

    pub fn remove_member(&self, user_id: u64) {
        self.members.lock().unwrap().remove(&user_id);
    }

    /// Current roles of a member, or `None` if they are not in the guild.
    pub fn roles_of(&self, user_id: u64) -> Option<Vec<u64>> {
        self.members
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|m| m.role_ids.clone())
    }

    /// Makes every subsequent role add/remove fail.
    pub fn fail_role_changes(&self, fail: bool) {
        self.fail_role_changes.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent channel post fail.
    pub fn fail_posts(&self, fail: bool) {
        self.fail_posts.store(fail, Ordering::SeqCst);
    }

    pub fn dm_count(&self, user_id: u64) -> usize {
        self.dms.lock().unwrap().iter().filter(|u| **u == user_id).count()
    }

    fn check_failure(&self) -> Result<(), AppError> {
        if self.fail_role_changes.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl DiscordGateway for FakeGateway {
    async fn guild_roster(&self, _guild_id: u64) -> Result<GuildRoster, AppError> {
        Ok(self.roster.clone())
    }

    async fn member(
        &self,
        _guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberSnapshot>, AppError> {
        Ok(self.members.lock().unwrap().get(&user_id).cloned())
    }

    async fn current_user_id(&self) -> Result<u64, AppError> {
        Ok(BOT)
    }

    async fn add_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.check_failure()?;

        let mut members = self.members.lock().unwrap();
        let member = members
            .get_mut(&user_id)
            .ok_or_else(|| AppError::from(serenity::Error::Other("unknown member")))?;
        if !member.role_ids.contains(&role_id) {
            member.role_ids.push(role_id);
        }

        Ok(())
    }

    async fn remove_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.check_failure()?;

        let mut members = self.members.lock().unwrap();
        if let Some(member) = members.get_mut(&user_id) {
            member.role_ids.retain(|id| *id != role_id);
        }
        self.removed.lock().unwrap().push((user_id, role_id));

        Ok(())
    }

    async fn send_dm(&self, user_id: u64, _message: CreateMessage) -> Result<(), AppError> {
        self.dms.lock().unwrap().push(user_id);
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        _message: CreateMessage,
    ) -> Result<u64, AppError> {
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }

        self.posts.lock().unwrap().push(channel_id);
        Ok(self.next_message_id.fetch_add(1, Ordering::SeqCst))
    }
}
