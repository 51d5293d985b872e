use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::infra::linear::LINEAR_API_URL;

const CONFIG_FILE_NAME: &str = ".linearizer-config.json";
const CONFIG_PATH_ENV: &str = "LINEAR_SYNC_CONFIG";
const API_KEY_ENV: &str = "LINEAR_SYNC_API_KEY";
const TEAM_ID_ENV: &str = "LINEAR_SYNC_TEAM_ID";
const STATE_ID_ENV: &str = "LINEAR_SYNC_STATE_ID";
const API_URL_ENV: &str = "LINEAR_SYNC_API_URL";

pub fn config_file_path() -> AppResult<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or_else(|| {
        AppError::Configuration("unable to determine home directory".to_string())
    })?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Credentials persisted by `init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    pub api_key: String,
    pub team_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_state_id: Option<String>,
}

impl StoredConfig {
    pub fn load_from(path: &Path) -> AppResult<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map(Some).map_err(|err| {
                AppError::Configuration(format!(
                    "invalid config file {}: {err}",
                    path.display()
                ))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Configuration(format!(
                "failed to read {}: {err}",
                path.display()
            ))),
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to encode config: {err}")))?;
        fs::write(path, data).map_err(|err| {
            AppError::Configuration(format!("failed to write {}: {err}", path.display()))
        })
    }
}

/// Removes the config file. Returns `false` when there was nothing to remove.
pub fn delete_config(path: &Path) -> AppResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(AppError::Configuration(format!(
            "failed to remove {}: {err}",
            path.display()
        ))),
    }
}

/// Effective settings for a run: the stored file overlaid with environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub team_id: String,
    pub default_state_id: Option<String>,
    pub api_url: String,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let path = config_file_path()?;
        let stored = StoredConfig::load_from(&path)?;
        Self::resolve(stored, |key| env::var(key).ok())
    }

    /// Settings for freshly entered credentials; only the endpoint comes from the environment.
    pub fn from_stored(stored: StoredConfig) -> Self {
        Self {
            api_key: stored.api_key,
            team_id: stored.team_id,
            default_state_id: stored.default_state_id,
            api_url: env::var(API_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| LINEAR_API_URL.to_string()),
        }
    }

    pub fn resolve(
        stored: Option<StoredConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_ENV).or_else(|| stored.as_ref().map(|cfg| cfg.api_key.clone()));
        let team_id = var(TEAM_ID_ENV).or_else(|| stored.as_ref().map(|cfg| cfg.team_id.clone()));
        let default_state_id = var(STATE_ID_ENV)
            .or_else(|| stored.as_ref().and_then(|cfg| cfg.default_state_id.clone()));
        let api_url = var(API_URL_ENV).unwrap_or_else(|| LINEAR_API_URL.to_string());

        match (api_key, team_id) {
            (Some(api_key), Some(team_id)) if !api_key.is_empty() && !team_id.is_empty() => {
                Ok(Self {
                    api_key,
                    team_id,
                    default_state_id,
                    api_url,
                })
            }
            _ => Err(AppError::Configuration(
                "No configuration found. Please run 'linear-sync init' first.".to_string(),
            )),
        }
    }
}
