use entity::{prelude::TicketCategory, settings::BotSettings};

use crate::{context::TestContext, error::TestError, factory, fixture};

/// Builder for creating test contexts with customizable settings.
///
/// Starts from settings with a single default category, no support role, no log
/// channel and no ticket welcome message, which keeps collaborator call recordings
/// small. Chain the `with_*` methods to adjust, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_support_role(42)
///     .with_log_channel(900)
///     .build()?;
/// ```
pub struct TestBuilder {
    settings: BotSettings,
}

impl TestBuilder {
    /// Creates a new test builder with the baseline test settings.
    pub fn new() -> Self {
        let mut settings = BotSettings::default();
        settings.tickets.categories = vec![fixture::ticket_category::entity()];
        settings.tickets.texts.welcome_message = None;

        Self { settings }
    }

    /// Appends a ticket category.
    pub fn with_category(mut self, category: TicketCategory) -> Self {
        self.settings.tickets.categories.push(category);
        self
    }

    /// Removes every ticket category.
    pub fn without_categories(mut self) -> Self {
        self.settings.tickets.categories.clear();
        self
    }

    pub fn with_support_role(mut self, role_id: u64) -> Self {
        self.settings.tickets.support_role_id = Some(role_id);
        self
    }

    pub fn with_log_channel(mut self, channel_id: u64) -> Self {
        self.settings.tickets.log_channel_id = Some(channel_id);
        self
    }

    pub fn with_parent_category(mut self, channel_id: u64) -> Self {
        self.settings.tickets.parent_category_id = Some(channel_id);
        self
    }

    /// Sets the templated message posted into new ticket channels.
    pub fn with_ticket_welcome(mut self, message: &str) -> Self {
        self.settings.tickets.texts.welcome_message = Some(message.to_string());
        self
    }

    pub fn with_welcome_channel(mut self, channel_id: u64) -> Self {
        self.settings.welcome.channel_id = Some(channel_id);
        self
    }

    /// Applies an arbitrary change to the settings.
    pub fn with_settings(mut self, f: impl FnOnce(&mut BotSettings)) -> Self {
        f(&mut self.settings);
        self
    }

    /// Creates the temporary directory and writes the settings file into it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `settings_path` holds the configured settings
    /// - `Err(TestError)` - Directory or file could not be written
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new(self.settings)?;

        factory::settings::write_settings(&context.settings_path, &context.settings)?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
