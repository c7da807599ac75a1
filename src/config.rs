use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{PromptError, PromptResult};

pub const GENERATOR_CONFIG_FILE: &str = "prompt_forge_config.json";

// Defaults matching the behaviour of the prompt generator form
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_HISTORY_KEY: &str = "monsterPromptGenerator_history";
pub const DEFAULT_MIN_PROMPT_LENGTH: usize = 10;
pub const DEFAULT_MODEL_VERSION: &str = "--v6";
pub const DEFAULT_QUALITY: &str = "--q 2";
pub const DEFAULT_STYLE_MODE: &str = "--style raw";
pub const DEFAULT_CHARACTER_WEIGHT: &str = "100";
pub const DEFAULT_NEGATIVE_TERMS: [&str; 8] = [
    "blurry",
    "low quality",
    "distorted",
    "deformed",
    "bad anatomy",
    "watermark",
    "signature",
    "text",
];

/// Directive tokens appended to image generation prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDirectives {
    pub model_version: String,
    pub quality: String,
    pub style_mode: String,
    pub default_character_weight: String,
    pub default_negative_terms: Vec<String>,
}

impl Default for ImageDirectives {
    fn default() -> Self {
        Self {
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
            style_mode: DEFAULT_STYLE_MODE.to_string(),
            default_character_weight: DEFAULT_CHARACTER_WEIGHT.to_string(),
            default_negative_terms: DEFAULT_NEGATIVE_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of prompts kept in history
    pub history_capacity: usize,
    /// Key under which the history is persisted
    pub history_key: String,
    /// Prompts whose trimmed length is below this are rejected
    pub min_prompt_length: usize,
    pub image_directives: ImageDirectives,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            min_prompt_length: DEFAULT_MIN_PROMPT_LENGTH,
            image_directives: ImageDirectives::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> PromptResult<()> {
        if self.history_capacity == 0 {
            return Err(PromptError::Config("history_capacity must be at least 1".to_string()));
        }
        if self.history_key.trim().is_empty() {
            return Err(PromptError::Config("history_key cannot be empty".to_string()));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config_file: String,
    config: Mutex<GeneratorConfig>,
}

impl ConfigManager {
    pub fn new(config_file: &str) -> Self {
        Self {
            config_file: config_file.to_string(),
            config: Mutex::new(GeneratorConfig::default()),
        }
    }

    pub fn load_config(&self) -> PromptResult<GeneratorConfig> {
        let config_path = Path::new(&self.config_file);

        // If the file doesn't exist, keep the defaults
        if !config_path.exists() {
            debug!("Config file {} not found, using defaults", self.config_file);
            return Ok(self.config.lock().clone());
        }

        let config_str = fs::read_to_string(config_path)
            .map_err(|e| PromptError::Config(format!("Failed to read {}: {}", self.config_file, e)))?;
        let config: GeneratorConfig = serde_json::from_str(&config_str)
            .map_err(|e| PromptError::Config(format!("Failed to parse {}: {}", self.config_file, e)))?;
        config.validate()?;

        *self.config.lock() = config.clone();
        info!("Loaded generator config from {}", self.config_file);

        Ok(config)
    }

    pub fn save_config(&self, config: &GeneratorConfig) -> PromptResult<()> {
        config.validate()?;
        let config_str = serde_json::to_string_pretty(config)
            .map_err(|e| PromptError::Config(format!("Failed to serialize config: {}", e)))?;

        // Create the directory if it doesn't exist
        if let Some(parent) = Path::new(&self.config_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PromptError::Config(format!("Failed to create config directory: {}", e)))?;
            }
        }

        fs::write(&self.config_file, config_str)
            .map_err(|e| PromptError::Config(format!("Failed to write {}: {}", self.config_file, e)))?;

        *self.config.lock() = config.clone();
        Ok(())
    }

    pub fn get_config(&self) -> GeneratorConfig {
        self.config.lock().clone()
    }
}
