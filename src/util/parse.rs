/// Parses a snowflake out of a user, role or channel mention, or a raw id.
///
/// Accepts `<@123>`, `<@!123>`, `<@&123>`, `<#123>` and `123`.
pub fn parse_mention_id(value: &str) -> Option<u64> {
    let trimmed = value
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_start_matches(['@', '#'])
        .trim_start_matches(['!', '&']);

    trimmed.parse::<u64>().ok().filter(|id| *id != 0)
}
