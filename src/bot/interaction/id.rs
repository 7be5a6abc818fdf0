use std::fmt;

/// Custom id of a button, select menu or modal created by the bot.
///
/// Every component the bot sends carries one of these as its custom id; `parse` is the
/// only way an incoming interaction is routed to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionId {
    PromoteMenuGrant,
    PromoteMenuEnd,
    PromoteMenuBan,
    PromoteMenuList,
    PromoteMenuLogs,
    PromoteGrantModal,
    PromoteEndModal,
    PromoteBanLookupModal,
    /// Opens the ban modal for a user.
    PromoteBan(u64),
    PromoteBanModal(u64),
    PromoteUnban(u64),
    /// Opens the duration modal for a grant.
    PromoteExtend(i32),
    PromoteExtendModal(i32),
    PromoteEnd(i32),
    AdminApprove(String),
    /// Role select shown after pressing approve.
    AdminApproveRole(String),
    AdminReject(String),
    AdminRejectModal(String),
    RespSelect,
    RespApply(i32),
    RespApplyModal(i32),
    RespSuggest,
    RespSuggestModal,
    RespRequestApprove(i32),
    RespRequestReject(i32),
}

impl InteractionId {
    /// Parses a custom id, returning `None` for ids this bot did not create.
    pub fn parse(value: &str) -> Option<Self> {
        let exact = match value {
            "promote_menu_grant" => Some(Self::PromoteMenuGrant),
            "promote_menu_end" => Some(Self::PromoteMenuEnd),
            "promote_menu_ban" => Some(Self::PromoteMenuBan),
            "promote_menu_list" => Some(Self::PromoteMenuList),
            "promote_menu_logs" => Some(Self::PromoteMenuLogs),
            "promote_grant_modal" => Some(Self::PromoteGrantModal),
            "promote_end_modal" => Some(Self::PromoteEndModal),
            "promote_ban_lookup_modal" => Some(Self::PromoteBanLookupModal),
            "resp_select" => Some(Self::RespSelect),
            "resp_suggest" => Some(Self::RespSuggest),
            "resp_suggest_modal" => Some(Self::RespSuggestModal),
            _ => None,
        };
        if exact.is_some() {
            return exact;
        }

        // Longer prefixes first where one is a prefix of another.
        if let Some(id) = value.strip_prefix("promote_ban_modal_") {
            return id.parse().ok().map(Self::PromoteBanModal);
        }
        if let Some(id) = value.strip_prefix("promote_ban_") {
            return id.parse().ok().map(Self::PromoteBan);
        }
        if let Some(id) = value.strip_prefix("promote_unban_") {
            return id.parse().ok().map(Self::PromoteUnban);
        }
        if let Some(id) = value.strip_prefix("promote_extend_modal_") {
            return id.parse().ok().map(Self::PromoteExtendModal);
        }
        if let Some(id) = value.strip_prefix("promote_extend_") {
            return id.parse().ok().map(Self::PromoteExtend);
        }
        if let Some(id) = value.strip_prefix("promote_end_") {
            return id.parse().ok().map(Self::PromoteEnd);
        }
        if let Some(id) = value.strip_prefix("admin_approve_role_") {
            return application_id(id).map(Self::AdminApproveRole);
        }
        if let Some(id) = value.strip_prefix("admin_approve_") {
            return application_id(id).map(Self::AdminApprove);
        }
        if let Some(id) = value.strip_prefix("admin_reject_modal_") {
            return application_id(id).map(Self::AdminRejectModal);
        }
        if let Some(id) = value.strip_prefix("admin_reject_") {
            return application_id(id).map(Self::AdminReject);
        }
        if let Some(id) = value.strip_prefix("resp_apply_modal_") {
            return id.parse().ok().map(Self::RespApplyModal);
        }
        if let Some(id) = value.strip_prefix("resp_apply_") {
            return id.parse().ok().map(Self::RespApply);
        }
        if let Some(id) = value.strip_prefix("resp_req_approve_") {
            return id.parse().ok().map(Self::RespRequestApprove);
        }
        if let Some(id) = value.strip_prefix("resp_req_reject_") {
            return id.parse().ok().map(Self::RespRequestReject);
        }

        None
    }
}

fn application_id(value: &str) -> Option<String> {
    (!value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()))
        .then(|| value.to_string())
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PromoteMenuGrant => f.write_str("promote_menu_grant"),
            Self::PromoteMenuEnd => f.write_str("promote_menu_end"),
            Self::PromoteMenuBan => f.write_str("promote_menu_ban"),
            Self::PromoteMenuList => f.write_str("promote_menu_list"),
            Self::PromoteMenuLogs => f.write_str("promote_menu_logs"),
            Self::PromoteGrantModal => f.write_str("promote_grant_modal"),
            Self::PromoteEndModal => f.write_str("promote_end_modal"),
            Self::PromoteBanLookupModal => f.write_str("promote_ban_lookup_modal"),
            Self::PromoteBan(user) => write!(f, "promote_ban_{}", user),
            Self::PromoteBanModal(user) => write!(f, "promote_ban_modal_{}", user),
            Self::PromoteUnban(user) => write!(f, "promote_unban_{}", user),
            Self::PromoteExtend(grant) => write!(f, "promote_extend_{}", grant),
            Self::PromoteExtendModal(grant) => write!(f, "promote_extend_modal_{}", grant),
            Self::PromoteEnd(grant) => write!(f, "promote_end_{}", grant),
            Self::AdminApprove(id) => write!(f, "admin_approve_{}", id),
            Self::AdminApproveRole(id) => write!(f, "admin_approve_role_{}", id),
            Self::AdminReject(id) => write!(f, "admin_reject_{}", id),
            Self::AdminRejectModal(id) => write!(f, "admin_reject_modal_{}", id),
            Self::RespSelect => f.write_str("resp_select"),
            Self::RespApply(resp) => write!(f, "resp_apply_{}", resp),
            Self::RespApplyModal(resp) => write!(f, "resp_apply_modal_{}", resp),
            Self::RespSuggest => f.write_str("resp_suggest"),
            Self::RespSuggestModal => f.write_str("resp_suggest_modal"),
            Self::RespRequestApprove(req) => write!(f, "resp_req_approve_{}", req),
            Self::RespRequestReject(req) => write!(f, "resp_req_reject_{}", req),
        }
    }
}
