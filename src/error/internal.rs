use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The guild the bot was asked to act in is not available through the API.
    #[error("Guild {0} is not available to the bot")]
    GuildUnavailable(u64),
}
