use thiserror::Error;

/// Failures to turn a chat message into a `Command`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not supplied.
    #[error("Missing argument `{0}`. Usage: `{1}`")]
    MissingArgument(&'static str, &'static str),

    /// An argument was supplied but could not be understood.
    #[error("Invalid {0}: `{1}`")]
    InvalidArgument(&'static str, String),

    /// The subcommand is not one the command knows.
    #[error("Unknown subcommand `{0}`. Usage: `{1}`")]
    UnknownSubcommand(String, &'static str),

    /// The invoking user is not allowed to run the command.
    #[error("You do not have permission to use this command.")]
    Forbidden,
}
