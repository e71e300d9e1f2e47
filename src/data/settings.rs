use entity::settings::BotSettings;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Repository for the JSON settings document.
///
/// Holds the parsed document in memory and writes the whole file back after every
/// successful update. Clones share the same state.
#[derive(Clone)]
pub struct SettingsRepository {
    path: Arc<PathBuf>,
    settings: Arc<RwLock<BotSettings>>,
}

impl SettingsRepository {
    /// Loads the settings document from `path`.
    ///
    /// A missing file is created with the default settings so administrators have a
    /// template to edit.
    ///
    /// # Arguments
    /// - `path` - Location of the settings JSON file
    ///
    /// # Returns
    /// - `Ok(SettingsRepository)` - Repository holding the loaded settings
    /// - `Err(AppError::IoErr)` - File could not be read or the default could not be written
    /// - `Err(AppError::JsonErr)` - File exists but is not a valid settings document
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        let settings = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Settings file {} not found, writing defaults",
                    path.display()
                );
                let settings = BotSettings::default();
                write_settings(&path, &settings).await?;
                settings
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Arc::new(path),
            settings: Arc::new(RwLock::new(settings)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a snapshot of the current settings.
    #[cfg(test)]
    pub async fn get(&self) -> BotSettings {
        self.settings.read().await.clone()
    }

    /// Reads a value out of the settings without cloning the whole document.
    pub async fn read<R>(&self, f: impl FnOnce(&BotSettings) -> R) -> R {
        let settings = self.settings.read().await;
        f(&*settings)
    }

    /// Applies `f` to a copy of the settings and persists the result.
    ///
    /// The in-memory settings only change once `f` succeeded and the file was written,
    /// so a rejected edit or a failed write leaves both untouched.
    ///
    /// # Returns
    /// - `Ok(R)` - Value returned by `f`
    /// - `Err(AppError)` - Error returned by `f`, or the file write failure
    pub async fn update<R, E>(
        &self,
        f: impl FnOnce(&mut BotSettings) -> Result<R, E>,
    ) -> Result<R, AppError>
    where
        E: Into<AppError>,
    {
        let mut settings = self.settings.write().await;
        let mut draft = settings.clone();

        let result = f(&mut draft).map_err(Into::into)?;

        write_settings(&self.path, &draft).await?;
        *settings = draft;

        Ok(result)
    }
}

async fn write_settings(path: &Path, settings: &BotSettings) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let raw = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, raw).await?;

    Ok(())
}
