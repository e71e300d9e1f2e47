//! Placeholder substitution for admin-editable texts.
//!
//! Texts stored in the settings document may contain `{user}`, `{server}` and
//! `{memberCount}`. Unknown placeholders are left as written.

/// Values substituted into a text template.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    /// Replaces `{user}`, normally a user mention.
    pub user: String,
    /// Replaces `{server}`.
    pub server: String,
    /// Replaces `{memberCount}`. Left untouched when unknown.
    pub member_count: Option<u64>,
}

/// Renders `template` with the values from `context`.
pub fn render(template: &str, context: &TemplateContext) -> String {
    let rendered = template
        .replace("{user}", &context.user)
        .replace("{server}", &context.server);

    match context.member_count {
        Some(count) => rendered.replace("{memberCount}", &count.to_string()),
        None => rendered,
    }
}
