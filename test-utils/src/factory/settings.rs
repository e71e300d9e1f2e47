//! Settings document factory.

use entity::settings::BotSettings;
use std::path::Path;

use crate::error::TestError;

/// Writes a settings document as pretty JSON, creating parent directories.
///
/// # Arguments
/// - `path` - Destination file
/// - `settings` - Settings to serialize
///
/// # Returns
/// - `Ok(())` - File written
/// - `Err(TestError)` - Serialization or filesystem failure
pub fn write_settings(path: &Path, settings: &BotSettings) -> Result<(), TestError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, raw)?;

    Ok(())
}
