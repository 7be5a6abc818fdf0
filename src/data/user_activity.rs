//! Activity counter repository.
//!
//! Each event increments two rows: the member's all-time totals and the row for the
//! current UTC day. Increments are applied in SQL so concurrent events are not lost; a
//! row is inserted only when the increment matched nothing.

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::stats::{ActivityKind, ActivityWindow, UserStats},
    util::time::day_key,
};

pub struct UserActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `amount` to one counter in both the totals and the daily row.
    ///
    /// # Arguments
    /// - `kind` - Which counter to increment
    /// - `amount` - How much to add
    /// - `at` - When the activity happened; selects the daily row
    pub async fn increment(
        &self,
        guild_id: u64,
        user_id: u64,
        kind: ActivityKind,
        amount: i64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.increment_totals(guild_id, user_id, kind, amount, at)
            .await?;
        self.increment_daily(guild_id, user_id, kind, amount, &day_key(at))
            .await?;

        Ok(())
    }

    async fn increment_totals(
        &self,
        guild_id: u64,
        user_id: u64,
        kind: ActivityKind,
        amount: i64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        use entity::user_activity::Column;

        let column = match kind {
            ActivityKind::Message => Column::Messages,
            ActivityKind::Reaction => Column::Reactions,
            ActivityKind::VoiceMinutes => Column::VoiceMinutes,
        };

        let result = entity::prelude::UserActivity::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .col_expr(Column::UpdatedAt, Expr::value(at))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(());
        }

        let (messages, reactions, voice_minutes) = split_amount(kind, amount);
        entity::user_activity::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            messages: ActiveValue::Set(messages),
            voice_minutes: ActiveValue::Set(voice_minutes),
            reactions: ActiveValue::Set(reactions),
            updated_at: ActiveValue::Set(at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn increment_daily(
        &self,
        guild_id: u64,
        user_id: u64,
        kind: ActivityKind,
        amount: i64,
        day: &str,
    ) -> Result<(), DbErr> {
        use entity::user_activity_daily::Column;

        let column = match kind {
            ActivityKind::Message => Column::Messages,
            ActivityKind::Reaction => Column::Reactions,
            ActivityKind::VoiceMinutes => Column::VoiceMinutes,
        };

        let result = entity::prelude::UserActivityDaily::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .filter(Column::Day.eq(day))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(());
        }

        let (messages, reactions, voice_minutes) = split_amount(kind, amount);
        entity::user_activity_daily::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            day: ActiveValue::Set(day.to_string()),
            messages: ActiveValue::Set(messages),
            voice_minutes: ActiveValue::Set(voice_minutes),
            reactions: ActiveValue::Set(reactions),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Reads a member's totals and their last seven days ending on `now`'s UTC day.
    ///
    /// Members with no recorded activity get all-zero stats.
    pub async fn get_stats(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<UserStats, DbErr> {
        let totals = entity::prelude::UserActivity::find()
            .filter(entity::user_activity::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::user_activity::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        let first_day = day_key(now - TimeDelta::days(6));
        let last_day = day_key(now);
        let days = entity::prelude::UserActivityDaily::find()
            .filter(entity::user_activity_daily::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::user_activity_daily::Column::UserId.eq(user_id.to_string()))
            .filter(entity::user_activity_daily::Column::Day.gte(first_day))
            .filter(entity::user_activity_daily::Column::Day.lte(last_day))
            .all(self.db)
            .await?;

        let mut window = ActivityWindow::default();
        for day in &days {
            window.messages += day.messages;
            window.voice_minutes += day.voice_minutes;
            window.reactions += day.reactions;
            if day.messages + day.voice_minutes + day.reactions > 0 {
                window.active_days += 1;
            }
        }

        Ok(match totals {
            Some(totals) => UserStats {
                messages: totals.messages,
                voice_minutes: totals.voice_minutes,
                reactions: totals.reactions,
                last_7_days: window,
            },
            None => UserStats {
                last_7_days: window,
                ..Default::default()
            },
        })
    }
}

/// Splits an increment into (messages, reactions, voice_minutes) for a fresh row.
fn split_amount(kind: ActivityKind, amount: i64) -> (i64, i64, i64) {
    match kind {
        ActivityKind::Message => (amount, 0, 0),
        ActivityKind::Reaction => (0, amount, 0),
        ActivityKind::VoiceMinutes => (0, 0, amount),
    }
}
