use thiserror::Error;

/// Validation failures of the promotion lifecycle.
///
/// Every variant's message is written for the Discord user who triggered the operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromotionError {
    #[error("Invalid duration '{0}'. Use a number with s, m, h, d or w (e.g. `7d`), or `permanent`.")]
    InvalidDuration(String),

    #[error("That role is not in this server's promotable admin roles.")]
    RoleNotAllowed,

    #[error("I need the Manage Roles permission to do that.")]
    BotMissingPermission,

    #[error("That role is above or equal to my highest role, so I cannot manage it.")]
    RoleAboveBot,

    #[error("The member already holds a role at or above that one.")]
    TargetAlreadyHigher,

    #[error("You can only grant roles below your own highest role.")]
    GranterTooLow,

    #[error("This member is banned from promotions.")]
    TargetBanned,

    #[error("The member already has that role.")]
    AlreadyHasRole,

    #[error("That member is not in this server.")]
    MemberNotFound,

    #[error("That role does not exist in this server.")]
    RoleNotFound,

    #[error("No active promotion found for that member and role.")]
    GrantNotFound,

    #[error("This member is already banned from promotions.")]
    AlreadyBanned,

    #[error("This member is not banned from promotions.")]
    NotBanned,

    #[error("Bots cannot be nominated.")]
    CandidateIsBot,

    #[error("This member was rejected recently and can apply again <t:{0}:R>.")]
    CandidateOnCooldown(i64),

    #[error("This member already has a pending admin application.")]
    ApplicationPending,

    #[error("That application no longer exists.")]
    ApplicationNotFound,
}
