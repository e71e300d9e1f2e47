use entity::settings::BotSettings;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context owning a temporary directory with the bot's file-backed state.
///
/// The directory and everything inside it is removed when the context is dropped, so
/// keep the context alive for the whole test.
pub struct TestContext {
    /// Temporary directory root.
    pub dir: TempDir,

    /// Settings file written by `TestBuilder::build`.
    pub settings_path: PathBuf,

    /// Directory transcripts are written to. Not created up front so tests can check
    /// that the code creates it.
    pub transcript_dir: PathBuf,

    /// Settings as written to `settings_path`.
    pub settings: BotSettings,
}

impl TestContext {
    /// Creates a context in a fresh temporary directory without writing any file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with paths inside the new directory
    /// - `Err(std::io::Error)` - Temporary directory could not be created
    pub fn new(settings: BotSettings) -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let settings_path = dir.path().join("settings.json");
        let transcript_dir = dir.path().join("transcripts");

        Ok(Self {
            dir,
            settings_path,
            transcript_dir,
            settings,
        })
    }

    /// Reads the settings file back from disk.
    ///
    /// Used to assert that an operation persisted its change.
    pub fn read_settings_file(&self) -> BotSettings {
        let raw = std::fs::read_to_string(&self.settings_path)
            .expect("Failed to read test settings file");
        serde_json::from_str(&raw).expect("Test settings file is not a valid settings document")
    }
}
