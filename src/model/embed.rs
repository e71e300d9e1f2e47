/// Embed composed through the embed builder modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw color as typed, e.g. `#5865F2`.
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub footer: Option<String>,
}

/// Parses a hex color such as `#5865F2`, `5865f2` or `0x5865F2`.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .unwrap_or(value);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}
