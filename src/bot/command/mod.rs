//! Chat command parsing.
//!
//! Messages starting with the configured prefix are parsed into a `Command` before any
//! handler runs, so handlers only ever see well-formed arguments. Users, roles and
//! channels may be given as mentions or raw ids.
//!
//! Execution lives in one submodule per command family:
//! - `promote` - Owner setup, settings and promotion management, plus the grant shortcut
//! - `apply` - Admin nominations
//! - `resp` - Responsibilities management

pub mod apply;
pub mod promote;
pub mod resp;

use serenity::all::CreateMessage;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::{command::CommandError, AppError},
    model::{duration::PromotionDuration, settings::SettingsChannel},
    state::AppState,
    util::parse::parse_mention_id,
};

const PROMOTE_USAGE: &str = "promote <setup|roles|channel|cooldown|replace|dm|list|logs|status|end|extend|ban|unban>";
const ROLES_USAGE: &str = "promote roles [add|remove <role>]";
const CHANNEL_USAGE: &str = "promote channel <log|applications|responsibilities|suggestions> <channel|none>";
const COOLDOWN_USAGE: &str = "promote cooldown <hours>";
const REPLACE_USAGE: &str = "promote replace <on|off>";
const DM_USAGE: &str = "promote dm <on|off>";
const STATUS_USAGE: &str = "promote status <user>";
const END_USAGE: &str = "promote end <user> <role> [reason]";
const EXTEND_USAGE: &str = "promote extend <user> <role> <duration>";
const BAN_USAGE: &str = "promote ban <user> <duration> <reason>";
const UNBAN_USAGE: &str = "promote unban <user>";
const GRANT_USAGE: &str = "p <user> <role> <duration> [reason]";
const APPLY_USAGE: &str = "admin-apply <user>";
const RESP_USAGE: &str = "resp <setup|list|info|add|remove|desc|order|image|shortcut|assign|unassign|role>";
const RESP_ADD_USAGE: &str = "resp add <name> | <description>";
const RESP_NAME_USAGE: &str = "resp <info|remove> <name>";
const RESP_DESC_USAGE: &str = "resp desc <name> | <text>";
const RESP_ORDER_USAGE: &str = "resp order <name> <number>";
const RESP_IMAGE_USAGE: &str = "resp image <name> <url|none>";
const RESP_SHORTCUT_USAGE: &str = "resp shortcut <name> <word|none>";
const RESP_ASSIGN_USAGE: &str = "resp <assign|unassign> <name> <user>";
const RESP_ROLE_USAGE: &str = "resp role <add|remove> <name> <role>";

/// Default number of log entries shown by `promote logs`.
pub const DEFAULT_LOG_COUNT: u64 = 10;
const MAX_LOG_COUNT: u64 = 25;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Owner-only promotion setup and management.
    Promote(PromoteCommand),
    /// Shortcut for granting a promotion.
    Grant {
        user_id: u64,
        role_id: u64,
        duration: PromotionDuration,
        reason: String,
    },
    /// Nominates a member for an admin role.
    AdminApply { candidate_id: u64 },
    /// Responsibilities management.
    Resp(RespCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromoteCommand {
    Setup,
    ListRoles,
    AddRole(u64),
    RemoveRole(u64),
    SetChannel(SettingsChannel, Option<u64>),
    Cooldown(i32),
    Replace(bool),
    Dm(bool),
    List,
    Logs(u64),
    Status(u64),
    End {
        user_id: u64,
        role_id: u64,
        reason: String,
    },
    Extend {
        user_id: u64,
        role_id: u64,
        duration: PromotionDuration,
    },
    Ban {
        user_id: u64,
        duration: PromotionDuration,
        reason: String,
    },
    Unban(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RespCommand {
    Setup,
    List,
    Info(String),
    Add { name: String, description: String },
    Remove(String),
    Desc { name: String, description: String },
    Order { name: String, sort_order: i32 },
    Image { name: String, url: Option<String> },
    Shortcut { name: String, word: Option<String> },
    Assign { name: String, user_id: u64 },
    Unassign { name: String, user_id: u64 },
    AddRole { name: String, role_id: u64 },
    RemoveRole { name: String, role_id: u64 },
}

impl Command {
    /// Parses a message into a command.
    ///
    /// # Returns
    /// - `None` - The message is not addressed to the bot (no prefix or unknown name)
    /// - `Some(Ok(Command))` - A well-formed command
    /// - `Some(Err(CommandError))` - A known command with bad arguments
    pub fn parse(content: &str, prefix: &str) -> Option<Result<Self, CommandError>> {
        let body = content.trim().strip_prefix(prefix)?;
        let mut args = Args::new(body);
        let name = args.next()?.to_lowercase();

        let parsed = match name.as_str() {
            "promote" => parse_promote(&mut args).map(Self::Promote),
            "p" | "grant" => parse_grant(&mut args),
            "admin-apply" | "adminapply" | "nominate" | "apply-admin" => {
                args.user("user", APPLY_USAGE)
                    .map(|candidate_id| Self::AdminApply { candidate_id })
            }
            "resp" => parse_resp(&mut args).map(Self::Resp),
            _ => return None,
        };

        Some(parsed)
    }

    /// Whether only bot owners and the guild owner may run this command.
    pub fn is_owner_only(&self) -> bool {
        matches!(self, Self::Promote(_))
    }

    /// Whether the command needs administrator permission (or ownership).
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Resp(_))
    }
}

/// Where and by whom a command was sent.
pub struct Invocation<'a> {
    pub state: &'a AppState,
    pub http: &'a Arc<Http>,
    pub guild_id: u64,
    pub channel_id: u64,
    pub user_id: u64,
}

/// Runs a parsed command and returns the reply for the invoking channel.
///
/// Permissions are checked by the caller before this runs.
pub async fn execute(inv: &Invocation<'_>, command: Command) -> Result<CreateMessage, AppError> {
    match command {
        Command::Promote(command) => promote::run(inv, command).await,
        Command::Grant {
            user_id,
            role_id,
            duration,
            reason,
        } => promote::grant(inv, user_id, role_id, duration, reason).await,
        Command::AdminApply { candidate_id } => apply::run(inv, candidate_id).await,
        Command::Resp(command) => resp::run(inv, command).await,
    }
}

/// Whitespace-separated argument cursor over the text after the command name.
struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text.trim() }
    }

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let (token, rest) = match self.rest.find(char::is_whitespace) {
            Some(index) => self.rest.split_at(index),
            None => (self.rest, ""),
        };
        self.rest = rest.trim_start();

        Some(token)
    }

    /// Everything not consumed yet, trimmed.
    fn remainder(&mut self) -> &'a str {
        let rest = self.rest.trim();
        self.rest = "";
        rest
    }

    fn required(&mut self, name: &'static str, usage: &'static str) -> Result<&'a str, CommandError> {
        self.next()
            .ok_or(CommandError::MissingArgument(name, usage))
    }

    fn user(&mut self, name: &'static str, usage: &'static str) -> Result<u64, CommandError> {
        let value = self.required(name, usage)?;
        parse_mention_id(value).ok_or_else(|| CommandError::InvalidArgument(name, value.to_string()))
    }

    fn duration(&mut self, usage: &'static str) -> Result<PromotionDuration, CommandError> {
        let value = self.required("duration", usage)?;
        PromotionDuration::parse(value)
            .map_err(|_| CommandError::InvalidArgument("duration", value.to_string()))
    }
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "enable" | "enabled" => Some(true),
        "off" | "false" | "no" | "disable" | "disabled" => Some(false),
        _ => None,
    }
}

fn parse_promote(args: &mut Args) -> Result<PromoteCommand, CommandError> {
    let Some(sub) = args.next() else {
        return Err(CommandError::MissingArgument("subcommand", PROMOTE_USAGE));
    };

    let command = match sub.to_lowercase().as_str() {
        "setup" => PromoteCommand::Setup,
        "roles" | "role" => match args.next().map(str::to_lowercase).as_deref() {
            None | Some("list") => PromoteCommand::ListRoles,
            Some("add") => PromoteCommand::AddRole(args.user("role", ROLES_USAGE)?),
            Some("remove") => PromoteCommand::RemoveRole(args.user("role", ROLES_USAGE)?),
            Some(other) => {
                return Err(CommandError::UnknownSubcommand(other.to_string(), ROLES_USAGE))
            }
        },
        "channel" => {
            let kind = args.required("channel type", CHANNEL_USAGE)?;
            let channel = SettingsChannel::parse(kind)
                .ok_or_else(|| CommandError::InvalidArgument("channel type", kind.to_string()))?;
            let value = args.required("channel", CHANNEL_USAGE)?;
            let channel_id = if value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    parse_mention_id(value)
                        .ok_or_else(|| CommandError::InvalidArgument("channel", value.to_string()))?,
                )
            };
            PromoteCommand::SetChannel(channel, channel_id)
        }
        "cooldown" => {
            let value = args.required("hours", COOLDOWN_USAGE)?;
            let hours = value
                .parse::<i32>()
                .ok()
                .filter(|h| *h >= 0)
                .ok_or_else(|| CommandError::InvalidArgument("hours", value.to_string()))?;
            PromoteCommand::Cooldown(hours)
        }
        "replace" => {
            let value = args.required("on|off", REPLACE_USAGE)?;
            PromoteCommand::Replace(
                parse_toggle(value)
                    .ok_or_else(|| CommandError::InvalidArgument("toggle", value.to_string()))?,
            )
        }
        "dm" | "dms" => {
            let value = args.required("on|off", DM_USAGE)?;
            PromoteCommand::Dm(
                parse_toggle(value)
                    .ok_or_else(|| CommandError::InvalidArgument("toggle", value.to_string()))?,
            )
        }
        "list" => PromoteCommand::List,
        "logs" | "log" => {
            let count = match args.next() {
                Some(value) => value
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| CommandError::InvalidArgument("count", value.to_string()))?
                    .min(MAX_LOG_COUNT),
                None => DEFAULT_LOG_COUNT,
            };
            PromoteCommand::Logs(count)
        }
        "status" => PromoteCommand::Status(args.user("user", STATUS_USAGE)?),
        "end" => PromoteCommand::End {
            user_id: args.user("user", END_USAGE)?,
            role_id: args.user("role", END_USAGE)?,
            reason: args.remainder().to_string(),
        },
        "extend" => PromoteCommand::Extend {
            user_id: args.user("user", EXTEND_USAGE)?,
            role_id: args.user("role", EXTEND_USAGE)?,
            duration: args.duration(EXTEND_USAGE)?,
        },
        "ban" => {
            let user_id = args.user("user", BAN_USAGE)?;
            let duration = args.duration(BAN_USAGE)?;
            let reason = args.remainder();
            if reason.is_empty() {
                return Err(CommandError::MissingArgument("reason", BAN_USAGE));
            }
            PromoteCommand::Ban {
                user_id,
                duration,
                reason: reason.to_string(),
            }
        }
        "unban" => PromoteCommand::Unban(args.user("user", UNBAN_USAGE)?),
        other => {
            return Err(CommandError::UnknownSubcommand(
                other.to_string(),
                PROMOTE_USAGE,
            ))
        }
    };

    Ok(command)
}

fn parse_grant(args: &mut Args) -> Result<Command, CommandError> {
    Ok(Command::Grant {
        user_id: args.user("user", GRANT_USAGE)?,
        role_id: args.user("role", GRANT_USAGE)?,
        duration: args.duration(GRANT_USAGE)?,
        reason: args.remainder().to_string(),
    })
}

/// Splits `<name> | <text>`; the text may be empty.
fn split_piped(
    text: &str,
    usage: &'static str,
) -> Result<(String, String), CommandError> {
    let (name, rest) = text.split_once('|').unwrap_or((text, ""));
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::MissingArgument("name", usage));
    }

    Ok((name.to_string(), rest.trim().to_string()))
}

/// Splits `<name...> <last>` where the name may contain spaces.
fn split_last<'a>(
    text: &'a str,
    last: &'static str,
    usage: &'static str,
) -> Result<(String, &'a str), CommandError> {
    let text = text.trim();
    let Some((name, value)) = text.rsplit_once(char::is_whitespace) else {
        return Err(if text.is_empty() {
            CommandError::MissingArgument("name", usage)
        } else {
            CommandError::MissingArgument(last, usage)
        });
    };

    Ok((name.trim().to_string(), value))
}

fn optional_value(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_string())
    }
}

fn mention(value: &str, name: &'static str) -> Result<u64, CommandError> {
    parse_mention_id(value).ok_or_else(|| CommandError::InvalidArgument(name, value.to_string()))
}

fn parse_resp(args: &mut Args) -> Result<RespCommand, CommandError> {
    let Some(sub) = args.next() else {
        return Ok(RespCommand::List);
    };

    let command = match sub.to_lowercase().as_str() {
        "setup" => RespCommand::Setup,
        "list" => RespCommand::List,
        "info" => RespCommand::Info(required_name(args, RESP_NAME_USAGE)?),
        "remove" | "delete" => RespCommand::Remove(required_name(args, RESP_NAME_USAGE)?),
        "add" | "create" => {
            let (name, description) = split_piped(args.remainder(), RESP_ADD_USAGE)?;
            RespCommand::Add { name, description }
        }
        "desc" | "description" => {
            let (name, description) = split_piped(args.remainder(), RESP_DESC_USAGE)?;
            RespCommand::Desc { name, description }
        }
        "order" => {
            let (name, value) = split_last(args.remainder(), "number", RESP_ORDER_USAGE)?;
            let sort_order = value
                .parse::<i32>()
                .map_err(|_| CommandError::InvalidArgument("number", value.to_string()))?;
            RespCommand::Order { name, sort_order }
        }
        "image" => {
            let (name, value) = split_last(args.remainder(), "url", RESP_IMAGE_USAGE)?;
            RespCommand::Image {
                name,
                url: optional_value(value),
            }
        }
        "shortcut" => {
            let (name, value) = split_last(args.remainder(), "word", RESP_SHORTCUT_USAGE)?;
            RespCommand::Shortcut {
                name,
                word: optional_value(value),
            }
        }
        "assign" => {
            let (name, value) = split_last(args.remainder(), "user", RESP_ASSIGN_USAGE)?;
            RespCommand::Assign {
                name,
                user_id: mention(value, "user")?,
            }
        }
        "unassign" => {
            let (name, value) = split_last(args.remainder(), "user", RESP_ASSIGN_USAGE)?;
            RespCommand::Unassign {
                name,
                user_id: mention(value, "user")?,
            }
        }
        "role" => {
            let action = args.required("add|remove", RESP_ROLE_USAGE)?.to_lowercase();
            let (name, value) = split_last(args.remainder(), "role", RESP_ROLE_USAGE)?;
            let role_id = mention(value, "role")?;
            match action.as_str() {
                "add" => RespCommand::AddRole { name, role_id },
                "remove" => RespCommand::RemoveRole { name, role_id },
                _ => return Err(CommandError::UnknownSubcommand(action, RESP_ROLE_USAGE)),
            }
        }
        other => return Err(CommandError::UnknownSubcommand(other.to_string(), RESP_USAGE)),
    };

    Ok(command)
}

fn required_name(args: &mut Args, usage: &'static str) -> Result<String, CommandError> {
    let name = args.remainder();
    if name.is_empty() {
        return Err(CommandError::MissingArgument("name", usage));
    }

    Ok(name.to_string())
}
