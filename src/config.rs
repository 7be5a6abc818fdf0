use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_GRANT_POLL_CRON: &str = "0 * * * * *";
const DEFAULT_BAN_POLL_CRON: &str = "*/10 * * * * *";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Prefix chat commands must start with.
    pub prefix: String,
    /// Users allowed to run owner-only commands in every guild.
    pub bot_owner_ids: Vec<u64>,

    pub grant_poll_cron: String,
    pub ban_poll_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bot_owner_ids = match std::env::var("BOT_OWNER_IDS") {
            Ok(value) => parse_owner_ids(&value)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            prefix: std::env::var("BOT_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
            bot_owner_ids,
            grant_poll_cron: std::env::var("GRANT_POLL_CRON")
                .unwrap_or_else(|_| DEFAULT_GRANT_POLL_CRON.to_string()),
            ban_poll_cron: std::env::var("BAN_POLL_CRON")
                .unwrap_or_else(|_| DEFAULT_BAN_POLL_CRON.to_string()),
        })
    }

    /// Whether the user is one of the configured bot owners.
    pub fn is_bot_owner(&self, user_id: u64) -> bool {
        self.bot_owner_ids.contains(&user_id)
    }
}

/// Parses a comma-separated list of Discord user ids, ignoring empty entries.
fn parse_owner_ids(value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "BOT_OWNER_IDS".to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
