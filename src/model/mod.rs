pub mod application;
pub mod duration;
pub mod log;
pub mod promotion;
pub mod responsibility;
pub mod settings;
pub mod stats;

use sea_orm::DbErr;

/// Parses a stored Discord snowflake, naming the column in the error.
pub(crate) fn parse_snowflake(value: &str, column: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Parses an optional stored Discord snowflake.
pub(crate) fn parse_optional_snowflake(
    value: Option<String>,
    column: &str,
) -> Result<Option<u64>, DbErr> {
    value.map(|v| parse_snowflake(&v, column)).transpose()
}
