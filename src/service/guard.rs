//! Short-lived record of role removals performed by the bot itself.
//!
//! When the bot removes a role, Discord echoes the change back as a member update. The
//! member-update listener consults `RoleChangeGuard` to tell those echoes apart from
//! removals made by someone else. Entries live for 15 seconds and are consumed on first
//! match.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long a marked removal is remembered.
const GUARD_TTL_SECONDS: u64 = 15;

/// `(guild_id, user_id, role_id)`
type GuardKey = (u64, u64, u64);

/// In-memory TTL set of role changes the bot is about to make.
///
/// Cloning shares the underlying set, so the promotion service and the event handler can
/// hold separate handles to the same guard.
#[derive(Clone)]
pub struct RoleChangeGuard {
    entries: Arc<RwLock<HashMap<GuardKey, Instant>>>,
    ttl: Duration,
}

impl RoleChangeGuard {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(GUARD_TTL_SECONDS))
    }

    /// Creates a guard whose entries expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Records that the bot is about to change `role_id` on the member.
    ///
    /// Expired entries are dropped while the lock is held.
    pub async fn mark(&self, guild_id: u64, user_id: u64, role_id: u64) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        entries.retain(|_, expires_at| *expires_at > now);
        entries.insert((guild_id, user_id, role_id), now + self.ttl);
    }

    /// Checks for and removes a live entry.
    ///
    /// # Returns
    /// - `true` - The bot marked this change within the TTL; the entry is consumed
    /// - `false` - No live entry; the change came from somewhere else
    pub async fn consume(&self, guild_id: u64, user_id: u64, role_id: u64) -> bool {
        let mut entries = self.entries.write().await;

        match entries.remove(&(guild_id, user_id, role_id)) {
            Some(expires_at) => expires_at > Instant::now(),
            None => false,
        }
    }
}

impl Default for RoleChangeGuard {
    fn default() -> Self {
        Self::new()
    }
}
