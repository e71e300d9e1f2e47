/// Extracts the user id from a mention such as `<@123>` or `<@!123>`.
///
/// Bare ids are accepted as well. Used by prefix commands where arguments are raw
/// message text.
pub fn parse_user_mention(value: &str) -> Option<u64> {
    let value = value.trim();
    let inner = value
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.trim_start_matches('!'))
        .unwrap_or(value);

    inner.parse().ok().filter(|id| *id != 0)
}
