use crate::constants::*;
use crate::errors::{RoutineError, RoutineResult};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub catalog: String,
    pub categories: Vec<String>,
    pub system_prompt: String,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            catalog: DEFAULT_CATALOG.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => config_dir()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|_| PathBuf::from("logs")),
        }
    }
}

/// Loads the config from `~/.config/routine-builder/config.json`, creating it on first run.
pub fn load_config() -> RoutineResult<Config> {
    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;

    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api_key = key;
        }
    }

    validate_config(&config)?;
    Ok(config)
}

fn load_or_create(config_path: &Path) -> RoutineResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| RoutineError::config_error(format!("Failed to read config file: {}", e)))?;

        return serde_json::from_str(&config_str)
            .map_err(|e| RoutineError::config_error(format!("Failed to parse config: {}", e)));
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RoutineError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(&config)
        .map_err(|e| RoutineError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(config_path, config_str)
        .map_err(|e| RoutineError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(config)
}

fn config_dir() -> RoutineResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| RoutineError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("routine-builder"))
}

fn get_config_path() -> RoutineResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// A missing API key is allowed here; the caller logs it.
pub fn validate_config(config: &Config) -> RoutineResult<()> {
    if config.api_url.trim().is_empty() {
        return Err(RoutineError::config_error("api_url is required"));
    }

    if config.model.trim().is_empty() {
        return Err(RoutineError::config_error("Model name is required"));
    }

    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(RoutineError::config_error(
            "Temperature must be between 0.0 and 2.0",
        ));
    }

    if config.max_tokens == 0 {
        return Err(RoutineError::config_error(
            "max_tokens must be greater than 0",
        ));
    }

    if config.catalog.trim().is_empty() {
        return Err(RoutineError::config_error("catalog location is required"));
    }

    if config.categories.is_empty() {
        return Err(RoutineError::config_error(
            "at least one category is required",
        ));
    }

    Ok(())
}
