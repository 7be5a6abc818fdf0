//! Role hierarchy validation for promotions.
//!
//! Discord only lets a member manage roles below their own highest role. These checks
//! mirror that rule for the bot, the target and the granter using plain role positions so
//! they can be evaluated without any API access.

use crate::error::promotion::PromotionError;

/// Role positions involved in one promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyCheck {
    /// Position of the role being granted.
    pub role_position: i16,
    /// Position of the bot's highest role.
    pub bot_top_position: i16,
    pub bot_can_manage_roles: bool,
    /// Position of the target's highest role, not counting the role being granted.
    pub target_top_position: i16,
    /// Position of the granter's highest role.
    pub granter_top_position: i16,
    /// Guild owners may grant any role the bot can manage.
    pub granter_is_owner: bool,
}

/// Validates that the bot may grant the role and the granter may grant it to the target.
///
/// Checks run in order: bot permission, role below the bot, role above the target, role
/// below the granter (skipped for the guild owner).
///
/// # Returns
/// - `Ok(())` - Every check passed
/// - `Err(PromotionError::BotMissingPermission)` - Bot lacks Manage Roles
/// - `Err(PromotionError::RoleAboveBot)` - Role is at or above the bot's highest role
/// - `Err(PromotionError::TargetAlreadyHigher)` - Target already sits at or above the role
/// - `Err(PromotionError::GranterTooLow)` - Role is at or above the granter's highest role
pub fn validate_role_hierarchy(check: &HierarchyCheck) -> Result<(), PromotionError> {
    if !check.bot_can_manage_roles {
        return Err(PromotionError::BotMissingPermission);
    }

    if check.role_position >= check.bot_top_position {
        return Err(PromotionError::RoleAboveBot);
    }

    if check.role_position <= check.target_top_position {
        return Err(PromotionError::TargetAlreadyHigher);
    }

    if !check.granter_is_owner && check.role_position >= check.granter_top_position {
        return Err(PromotionError::GranterTooLow);
    }

    Ok(())
}
